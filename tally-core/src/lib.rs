//! tally-core: session state machine for a budget-tracked shopping list
//!
//! This crate provides the business logic for tally:
//!
//! - **Money** - [`Money`] for exact decimal currency arithmetic
//! - **Catalog** - [`Catalog`] and [`CatalogItem`], the read-only item set
//! - **Session** - [`SessionState`], the phase machine driven by [`Op`] events
//! - **Errors** - [`SessionError`] and friends, all recoverable notifications
//!
//! # Quick Start
//!
//! ```
//! use tally_core::{Catalog, Op, SessionState};
//!
//! fn example(catalog: &Catalog) -> Result<(), tally_core::SessionError> {
//!     let state = SessionState::new();
//!     let state = state.apply(Op::SetBudget("250".into()))?;
//!     let state = state.apply(Op::Search("app".into()))?;
//!     if let Some(item) = state.search_results(catalog).first() {
//!         let item = (*item).clone();
//!         let state = state.apply(Op::AddItem { item, quantity: 2 })?;
//!         assert!(state.spent() <= state.budget().unwrap());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Every operation takes the current state by reference and returns a fresh
//! snapshot or a tagged failure; a rejected operation leaves the prior state
//! untouched.

pub mod catalog;
pub mod error;
pub mod money;
pub mod session;

// Re-export key types for convenience
pub use catalog::{Catalog, CatalogItem};
pub use error::{CatalogError, MoneyParseError, SessionError};
pub use money::Money;
pub use session::{CartLine, DEFAULT_SUGGESTION, Op, Phase, SessionState};
