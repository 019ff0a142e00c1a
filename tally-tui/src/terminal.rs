//! Terminal setup and teardown for the tally TUI.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used throughout the TUI.
pub type TallyTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Sets up the terminal for TUI rendering.
///
/// Enables raw mode and enters the alternate screen. The returned terminal
/// should be passed to `restore_terminal` on exit to clean up properly.
pub fn setup_terminal() -> io::Result<TallyTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restores the terminal to its normal state.
///
/// Disables raw mode and leaves the alternate screen. Should be called
/// on exit and in panic hooks to avoid leaving the terminal in a bad state.
pub fn restore_terminal(terminal: &mut TallyTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    Ok(())
}

/// Installs a panic hook that restores the terminal on crash.
///
/// Ensures the terminal is returned to a usable state even if the
/// application panics. Should be called once at startup before entering
/// the TUI.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration - ignore errors
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_terminal_type_alias_compiles() {
        // We can't create a real terminal in tests without a TTY.
        fn _accepts_terminal(_t: &TallyTerminal) {}
    }

    #[test]
    fn setup_and_restore_have_matching_signatures() {
        fn _check_setup() -> io::Result<TallyTerminal> {
            setup_terminal()
        }

        fn _check_restore(t: &mut TallyTerminal) -> io::Result<()> {
            restore_terminal(t)
        }
    }
}
