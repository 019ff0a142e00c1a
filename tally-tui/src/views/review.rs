//! Review view - the finalized shopping list.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::traits::ViewRenderer;
use crate::App;

/// Modal-style summary of the finalized list.
#[derive(Debug, Clone, Default)]
pub struct ReviewView;

impl ReviewView {
    fn modal_area(area: Rect, lines: u16) -> Rect {
        let [h] = Layout::horizontal([Constraint::Length(50)])
            .flex(Flex::Center)
            .areas(area);
        let height = (lines + 5).min(area.height);
        let [v] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(h);
        v
    }
}

impl ViewRenderer for ReviewView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let cart = app.state.cart();
        let modal = Self::modal_area(area, cart.len().max(1) as u16);

        let block = Block::default()
            .title(" Your Shopping List ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent));
        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        let mut lines: Vec<Line> = if cart.is_empty() {
            vec![Line::from(Span::styled(
                "Nothing was added",
                Style::default().fg(app.theme.muted),
            ))]
        } else {
            cart.iter()
                .map(|line| {
                    Line::from(vec![
                        Span::styled(
                            format!("{}  x{}", line.item.description, line.quantity),
                            Style::default().fg(app.theme.fg),
                        ),
                        Span::raw("  "),
                        Span::styled(
                            line.line_total().to_string(),
                            Style::default().fg(app.theme.success),
                        ),
                    ])
                })
                .collect()
        };

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("Total: ", app.theme.bold),
            Span::styled(
                app.state.spent().to_string(),
                Style::default().fg(app.theme.accent),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            "Esc to continue shopping",
            Style::default().fg(app.theme.muted),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn title(&self) -> &str {
        "Review"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_view_has_correct_title() {
        let view = ReviewView;
        assert_eq!(view.title(), "Review");
    }

    #[test]
    fn modal_area_never_exceeds_screen() {
        let area = Rect::new(0, 0, 80, 10);
        let modal = ReviewView::modal_area(area, 40);
        assert!(modal.height <= area.height);
    }
}
