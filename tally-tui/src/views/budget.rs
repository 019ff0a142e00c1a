//! Budget entry view - shown until a valid budget is set.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::traits::ViewRenderer;
use crate::App;

/// Centered prompt asking for the session budget.
#[derive(Debug, Clone, Default)]
pub struct BudgetView;

impl BudgetView {
    /// Centers a fixed-size prompt box in the available area.
    fn prompt_area(area: Rect) -> Rect {
        let [h] = Layout::horizontal([Constraint::Length(44)])
            .flex(Flex::Center)
            .areas(area);
        let [v] = Layout::vertical([Constraint::Length(7)])
            .flex(Flex::Center)
            .areas(h);
        v
    }
}

impl ViewRenderer for BudgetView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let prompt = Self::prompt_area(area);

        let block = Block::default()
            .title(" Enter Your Budget ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent));
        let inner = block.inner(prompt);
        frame.render_widget(block, prompt);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        let input_line = Line::from(vec![
            Span::styled("₹ ", Style::default().fg(app.theme.accent)),
            Span::styled(
                app.budget_input.buffer.as_str(),
                Style::default().fg(app.theme.fg),
            ),
        ]);
        frame.render_widget(Paragraph::new(input_line), rows[1]);
        frame.set_cursor_position((
            rows[1].x + 2 + app.budget_input.cursor_chars() as u16,
            rows[1].y,
        ));

        if let Some(message) = &app.status {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    message.as_str(),
                    Style::default().fg(app.theme.error),
                )),
                rows[2],
            );
        }

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Enter to confirm, Esc to quit",
                Style::default().fg(app.theme.muted),
            )),
            rows[3],
        );
    }

    fn title(&self) -> &str {
        "Budget"
    }
}
