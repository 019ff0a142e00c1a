//! Traits for view rendering in the tally TUI.

use ratatui::{Frame, layout::Rect};

use crate::App;

/// Trait for views that can render themselves.
///
/// Each phase of the session has one view implementing this trait.
pub trait ViewRenderer {
    /// Render the view to the terminal frame.
    fn render(&self, frame: &mut Frame, area: Rect, app: &App);

    /// Get the view's title for display.
    fn title(&self) -> &str;
}
