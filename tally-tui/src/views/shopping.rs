//! Shopping view - search, results, cart, and suggestion.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tally_core::Money;

use super::traits::ViewRenderer;
use crate::app::{App, Focus};
use crate::widgets::{BudgetBarWidget, SuggestionBox};

/// Fixed height of the results panel (rows visible inside the border).
pub const RESULTS_VISIBLE: usize = 10;
/// Fixed height of the cart panel (rows visible inside the border).
pub const CART_VISIBLE: usize = 6;

/// The main view while the session is in the shopping phase.
#[derive(Debug, Clone, Default)]
pub struct ShoppingView;

impl ViewRenderer for ShoppingView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::vertical([
            Constraint::Length(1),                       // budget bar
            Constraint::Length(3),                       // search input
            Constraint::Length(RESULTS_VISIBLE as u16 + 2), // results
            Constraint::Length(CART_VISIBLE as u16 + 2), // cart
            Constraint::Length(3),                       // suggestion
            Constraint::Min(1),                          // status line
        ])
        .split(area);

        let bar = BudgetBarWidget::new(
            app.state.budget().unwrap_or(Money::ZERO),
            app.state.spent(),
        );
        frame.render_widget(bar.to_paragraph(&app.theme), chunks[0]);

        self.render_search(frame, chunks[1], app);

        let results = app.state.search_results(&app.catalog);
        let searching = !app.state.search_term().is_empty();
        frame.render_widget(
            app.results.to_list(&results, searching, &app.theme),
            chunks[2],
        );

        frame.render_widget(
            app.cart
                .to_list(app.state.cart(), app.focus == Focus::Cart, &app.theme),
            chunks[3],
        );

        frame.render_widget(
            SuggestionBox::to_paragraph(app.state.suggestion(), &app.theme),
            chunks[4],
        );

        self.render_status(frame, chunks[5], app);
    }

    fn title(&self) -> &str {
        "Shopping"
    }
}

impl ShoppingView {
    fn render_search(&self, frame: &mut Frame, area: Rect, app: &App) {
        let focused = app.focus == Focus::Search;
        let block = Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused {
                app.theme.accent
            } else {
                app.theme.border
            }));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                app.search_input.buffer.as_str(),
                Style::default().fg(app.theme.fg),
            )),
            inner,
        );
        if focused {
            frame.set_cursor_position((
                inner.x + app.search_input.cursor_chars() as u16,
                inner.y,
            ));
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, app: &App) {
        let line = match &app.status {
            Some(message) => Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(app.theme.error),
            )),
            None => Line::from(Span::styled(
                "Tab cart/search  ↑↓ move  +/- qty  Enter add/remove  Ctrl-F done  Esc quit",
                Style::default().fg(app.theme.muted),
            )),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shopping_view_has_correct_title() {
        let view = ShoppingView;
        assert_eq!(view.title(), "Shopping");
    }
}
