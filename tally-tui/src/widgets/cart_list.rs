//! Cart panel listing the current shopping list lines.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use tally_core::CartLine;

use crate::Theme;

/// Widget state for the cart panel.
#[derive(Debug, Clone, Default)]
pub struct CartListWidget {
    pub selected: usize,
    pub scroll_offset: usize,
}

impl CartListWidget {
    /// Creates a new cart widget with the cursor on the first line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves selection to the next line, wrapping at the end.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
    }

    /// Moves selection to the previous line, wrapping at the start.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if self.selected == 0 {
            self.selected = len - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Clamps the cursor after a removal shortened the cart.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.scroll_offset = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Updates the scroll offset so the selected line is visible.
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

    /// Converts the cart to a renderable List.
    ///
    /// When `focused`, the selected line is highlighted for removal.
    pub fn to_list<'a>(&self, cart: &'a [CartLine], focused: bool, theme: &Theme) -> List<'a> {
        let items: Vec<ListItem> = if cart.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                "Nothing in the list yet",
                Style::default().fg(theme.muted),
            )))]
        } else {
            cart.iter()
                .enumerate()
                .skip(self.scroll_offset)
                .map(|(i, line)| self.cart_row(line, focused && i == self.selected, theme))
                .collect()
        };

        let block = Block::default()
            .title(" Shopping List ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused { theme.accent } else { theme.border }));

        List::new(items).block(block)
    }

    fn cart_row<'a>(&self, line: &'a CartLine, selected: bool, theme: &Theme) -> ListItem<'a> {
        let row_style = if selected {
            Style::default().fg(theme.accent).bg(theme.selection)
        } else {
            Style::default().fg(theme.fg)
        };

        ListItem::new(Line::from(vec![
            Span::styled(if selected { "> " } else { "  " }, row_style),
            Span::styled(line.item.description.as_str(), row_style),
            Span::styled(
                format!("  x{}", line.quantity),
                Style::default().fg(theme.muted),
            ),
            Span::styled(
                format!("  {}", line.line_total()),
                Style::default().fg(theme.success),
            ),
        ]))
    }
}
