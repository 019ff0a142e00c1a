//! View system for the tally TUI.
//!
//! One view per session phase; the core state machine decides which view is
//! visible, so there is no separate navigation state here.

mod budget;
mod review;
mod shopping;
mod traits;

pub use budget::BudgetView;
pub use review::ReviewView;
pub use shopping::{CART_VISIBLE, RESULTS_VISIBLE, ShoppingView};
pub use traits::ViewRenderer;
