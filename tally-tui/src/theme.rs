//! Color theme for the tally TUI.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
///
/// Contains the colors and styles needed to render every view consistently.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub selection: Color,
    pub muted: Color,

    // Text styles
    pub bold: Style,
    pub dim: Style,
}

/// Creates the default tally theme.
///
/// Warm amber highlights on a dark background, green for amounts that are
/// still within budget and red for rejections.
pub fn tally_default() -> Theme {
    let fg = Color::Rgb(230, 225, 210); // warm off-white

    Theme {
        name: "tally".into(),

        bg: Color::Rgb(22, 22, 26),
        fg,
        accent: Color::Rgb(255, 176, 46), // amber
        success: Color::Rgb(120, 220, 120),
        warning: Color::Rgb(255, 200, 0),
        error: Color::Rgb(255, 95, 95),

        border: Color::Rgb(70, 70, 80),
        selection: Color::Rgb(60, 50, 25),
        muted: Color::Rgb(130, 130, 140),

        bold: Style::default().fg(fg).add_modifier(Modifier::BOLD),
        dim: Style::default().fg(fg).add_modifier(Modifier::DIM),
    }
}
