//! One-line budget summary bar for the shopping view.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use tally_core::Money;

use crate::Theme;

/// Widget displaying budget, spent, and remaining amounts in a single line.
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetBarWidget {
    pub budget: Money,
    pub spent: Money,
}

impl BudgetBarWidget {
    /// Creates a bar for the given budget and running total.
    pub fn new(budget: Money, spent: Money) -> Self {
        Self { budget, spent }
    }

    /// Amount still available, zero if the cart sits on the ceiling.
    pub fn remaining(&self) -> Money {
        self.budget.checked_sub(self.spent).unwrap_or(Money::ZERO)
    }

    /// True when less than a tenth of the budget is left.
    pub fn running_low(&self) -> bool {
        self.remaining().paise() * 10 < self.budget.paise()
    }

    /// Converts the widget to a renderable Paragraph.
    ///
    /// Layout: "Budget: ₹200   Spent: ₹80   Left: ₹120"
    pub fn to_paragraph(&self, theme: &Theme) -> Paragraph<'_> {
        let left_color = if self.running_low() {
            theme.warning
        } else {
            theme.success
        };

        let line = Line::from(vec![
            Span::styled("Budget: ", Style::default().fg(theme.fg)),
            Span::styled(self.budget.to_string(), Style::default().fg(theme.accent)),
            Span::raw("   "),
            Span::styled("Spent: ", Style::default().fg(theme.fg)),
            Span::styled(self.spent.to_string(), Style::default().fg(theme.fg)),
            Span::raw("   "),
            Span::styled("Left: ", Style::default().fg(theme.fg)),
            Span::styled(self.remaining().to_string(), Style::default().fg(left_color)),
        ]);

        Paragraph::new(line)
    }
}
