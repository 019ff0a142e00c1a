//! Search-result list with selection and a pending quantity.
//!
//! The visible items are derived from the session snapshot each frame, so
//! this widget only keeps cursor state: which row is selected, the scroll
//! offset, and the quantity the next add will use.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use tally_core::CatalogItem;

use crate::Theme;

/// Largest per-line quantity the picker offers.
pub const MAX_QUANTITY: u32 = 99;

/// Widget state for the search-result list.
#[derive(Debug, Clone)]
pub struct ItemListWidget {
    pub selected: usize,
    pub scroll_offset: usize,
    /// Quantity for the next add, always at least 1.
    pub quantity: u32,
}

impl Default for ItemListWidget {
    fn default() -> Self {
        Self {
            selected: 0,
            scroll_offset: 0,
            quantity: 1,
        }
    }
}

impl ItemListWidget {
    /// Creates a new widget with the cursor on the first row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves selection to the next row, wrapping at the end.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
        self.quantity = 1;
    }

    /// Moves selection to the previous row, wrapping at the start.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if self.selected == 0 {
            self.selected = len - 1;
        } else {
            self.selected -= 1;
        }
        self.quantity = 1;
    }

    /// Returns the cursor to the top after the result set changed.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
        self.quantity = 1;
    }

    /// Raises the pending quantity, capped at [`MAX_QUANTITY`].
    pub fn increment_quantity(&mut self) {
        if self.quantity < MAX_QUANTITY {
            self.quantity += 1;
        }
    }

    /// Lowers the pending quantity, floored at 1.
    pub fn decrement_quantity(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    /// Updates the scroll offset so the selected row is visible.
    pub fn ensure_visible(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected - visible_height + 1;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        }
    }

    /// Converts the visible results to a renderable List.
    ///
    /// The selected row shows the pending quantity; an empty result set shows
    /// a hint instead.
    pub fn to_list<'a>(&self, results: &[&'a CatalogItem], searching: bool, theme: &Theme) -> List<'a> {
        let items: Vec<ListItem> = if results.is_empty() {
            let hint = if searching {
                "No matching items"
            } else {
                "Type to search the catalog"
            };
            vec![ListItem::new(Line::from(Span::styled(
                hint,
                Style::default().fg(theme.muted),
            )))]
        } else {
            results
                .iter()
                .enumerate()
                .skip(self.scroll_offset)
                .map(|(i, item)| self.result_row(item, i == self.selected, theme))
                .collect()
        };

        let block = Block::default()
            .title(" Results ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));

        List::new(items).block(block)
    }

    fn result_row<'a>(&self, item: &'a CatalogItem, selected: bool, theme: &Theme) -> ListItem<'a> {
        let row_style = if selected {
            Style::default().fg(theme.accent).bg(theme.selection)
        } else {
            Style::default().fg(theme.fg)
        };

        let mut spans = vec![
            Span::styled(if selected { "> " } else { "  " }, row_style),
            Span::styled(item.description.as_str(), row_style),
            Span::styled(format!("  {}", item.price), Style::default().fg(theme.muted)),
        ];
        if selected {
            spans.push(Span::styled(
                format!("   x{}", self.quantity),
                Style::default().fg(theme.accent),
            ));
        }

        ListItem::new(Line::from(spans))
    }
}
