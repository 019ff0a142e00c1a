//! Suggestion box shown under the cart.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::Theme;

/// Widget rendering the current suggestion text.
pub struct SuggestionBox;

impl SuggestionBox {
    /// Converts the suggestion text to a renderable Paragraph.
    pub fn to_paragraph<'a>(suggestion: &'a str, theme: &Theme) -> Paragraph<'a> {
        let block = Block::default()
            .title(" Suggestion ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));

        Paragraph::new(Line::from(Span::styled(
            suggestion,
            Style::default().fg(theme.muted),
        )))
        .block(block)
    }
}
