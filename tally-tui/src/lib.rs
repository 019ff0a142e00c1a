//! Terminal UI for tally.
//!
//! This crate provides the presentation layer over `tally-core`'s session
//! state machine, built on ratatui and crossterm. Key events become session
//! operations; every accepted operation yields a fresh state snapshot that
//! the next frame renders.

mod app;
mod terminal;
mod theme;
mod views;
mod widgets;

pub use app::{App, Focus};
pub use terminal::{TallyTerminal, install_panic_hook, restore_terminal, setup_terminal};
pub use theme::{Theme, tally_default};
pub use views::{BudgetView, ReviewView, ShoppingView, ViewRenderer};
pub use widgets::{
    BudgetBarWidget, CartListWidget, ItemListWidget, MAX_QUANTITY, SuggestionBox, TextInput,
};
