//! The session state machine.
//!
//! One `SessionState` holds everything a single interactive session knows:
//! the budget ceiling, the cart, the running total, the search term, and the
//! current phase. Operations never mutate in place; each takes the current
//! state by reference and returns a fresh snapshot or a tagged failure, so a
//! rejected operation is all-or-nothing by construction.

use crate::catalog::{Catalog, CatalogItem};
use crate::error::SessionError;
use crate::money::Money;

/// Placeholder shown in the suggestion box when the last added item carries
/// no suggestion of its own.
pub const DEFAULT_SUGGESTION: &str = "What do you need?";

/// UI phase of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Session start; waiting for a valid budget.
    #[default]
    AwaitingBudget,
    /// Budget set; searching, adding, and removing items.
    Shopping,
    /// Reviewing the finalized list.
    ReviewingFinalList,
}

/// One line of the cart: an item snapshot plus a chosen quantity.
///
/// Created on add and never mutated; changing a quantity means removing the
/// line and adding a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub item: CatalogItem,
    pub quantity: u32,
}

impl CartLine {
    /// Price times quantity for this line.
    pub fn line_total(&self) -> Money {
        // admitted lines were checked against the budget, so this fits
        Money::from_paise(self.item.price.paise() * self.quantity as u64)
    }
}

/// A discrete, named event from the presentation layer, mirroring the
/// session operations one-to-one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    SetBudget(String),
    Search(String),
    AddItem { item: CatalogItem, quantity: u32 },
    RemoveItem(usize),
    Finalize,
    CloseReview,
}

/// Complete state of one interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    phase: Phase,
    budget: Option<Money>,
    spent: Money,
    cart: Vec<CartLine>,
    search_term: String,
    suggestion: String,
}

impl SessionState {
    /// A fresh session: no budget, empty cart, awaiting budget entry.
    pub fn new() -> Self {
        Self {
            phase: Phase::AwaitingBudget,
            budget: None,
            spent: Money::ZERO,
            cart: Vec::new(),
            search_term: String::new(),
            suggestion: DEFAULT_SUGGESTION.to_string(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The budget ceiling, `None` until set.
    pub fn budget(&self) -> Option<Money> {
        self.budget
    }

    /// Running total cost of all cart lines.
    pub fn spent(&self) -> Money {
        self.spent
    }

    /// Budget minus spent, `None` before the budget is set.
    pub fn remaining(&self) -> Option<Money> {
        self.budget.and_then(|b| b.checked_sub(self.spent))
    }

    /// The cart lines in insertion order.
    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    /// The normalized search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The current suggestion text.
    pub fn suggestion(&self) -> &str {
        &self.suggestion
    }

    /// Catalog items visible for the current search term, in catalog order.
    /// The empty term yields no results.
    pub fn search_results<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CatalogItem> {
        catalog.filter_prefix(&self.search_term)
    }

    /// Apply a presentation event to produce the next snapshot.
    pub fn apply(&self, op: Op) -> Result<SessionState, SessionError> {
        match op {
            Op::SetBudget(raw) => self.set_budget(&raw),
            Op::Search(term) => self.search(&term),
            Op::AddItem { item, quantity } => self.add_item(&item, quantity),
            Op::RemoveItem(index) => self.remove_item(index),
            Op::Finalize => self.finalize(),
            Op::CloseReview => self.close_review(),
        }
    }

    /// Set the session budget from raw user input and enter `Shopping`.
    ///
    /// Fails with [`SessionError::InvalidBudget`] on anything non-numeric or
    /// not strictly positive. Only callable in `AwaitingBudget`; the budget
    /// is set exactly once per session.
    pub fn set_budget(&self, raw: &str) -> Result<SessionState, SessionError> {
        self.require_phase(Phase::AwaitingBudget)?;

        let budget = match Money::parse(raw) {
            Ok(amount) if !amount.is_zero() => amount,
            _ => {
                tracing::debug!(input = raw, "rejected budget input");
                return Err(SessionError::InvalidBudget(raw.to_string()));
            }
        };

        tracing::debug!(%budget, "budget set, entering Shopping");
        Ok(SessionState {
            phase: Phase::Shopping,
            budget: Some(budget),
            ..self.clone()
        })
    }

    /// Update the search term to the trimmed, lowercased input.
    pub fn search(&self, term: &str) -> Result<SessionState, SessionError> {
        self.require_phase(Phase::Shopping)?;

        Ok(SessionState {
            search_term: term.trim().to_lowercase(),
            ..self.clone()
        })
    }

    /// Append a cart line for `item`, validated against the budget.
    ///
    /// Quantities below 1 are clamped to 1. Fails with
    /// [`SessionError::BudgetExceeded`] when `spent + price × quantity`
    /// passes the budget; landing exactly on the budget is accepted.
    /// Duplicate items become separate lines. The suggestion box takes the
    /// item's suggestion, or resets to the placeholder.
    pub fn add_item(&self, item: &CatalogItem, quantity: u32) -> Result<SessionState, SessionError> {
        self.require_phase(Phase::Shopping)?;

        // Shopping implies a budget was set
        let budget = self.budget.ok_or(SessionError::WrongPhase {
            expected: Phase::AwaitingBudget,
            actual: self.phase,
        })?;

        let quantity = quantity.max(1);

        // a cost that overflows paise certainly exceeds any budget
        let exceeded = |cost: Money| SessionError::BudgetExceeded {
            cost,
            spent: self.spent,
            budget,
        };
        let cost = item.price.times(quantity).ok_or_else(|| exceeded(item.price))?;
        let new_spent = self.spent.checked_add(cost).ok_or_else(|| exceeded(cost))?;

        if new_spent > budget {
            tracing::debug!(item = %item.description, %cost, spent = %self.spent, "add rejected, budget exceeded");
            return Err(exceeded(cost));
        }

        let mut cart = self.cart.clone();
        cart.push(CartLine {
            item: item.clone(),
            quantity,
        });

        tracing::debug!(item = %item.description, quantity, spent = %new_spent, "item added");
        Ok(SessionState {
            spent: new_spent,
            cart,
            suggestion: item
                .suggestion
                .clone()
                .unwrap_or_else(|| DEFAULT_SUGGESTION.to_string()),
            ..self.clone()
        })
    }

    /// Remove the cart line at `index` (0-based, current position).
    ///
    /// An out-of-range index is a caller contract violation, not something
    /// well-formed UI input can produce; it is surfaced as
    /// [`SessionError::IndexOutOfRange`] and logged at error level.
    pub fn remove_item(&self, index: usize) -> Result<SessionState, SessionError> {
        self.require_phase(Phase::Shopping)?;

        if index >= self.cart.len() {
            tracing::error!(index, len = self.cart.len(), "remove_item index out of range");
            return Err(SessionError::IndexOutOfRange {
                index,
                len: self.cart.len(),
            });
        }

        let mut cart = self.cart.clone();
        let removed = cart.remove(index);
        // recompute rather than subtract so the invariant holds by construction
        let spent = Money::from_paise(cart.iter().map(|l| l.line_total().paise()).sum());

        tracing::debug!(item = %removed.item.description, %spent, "line removed");
        Ok(SessionState {
            spent,
            cart,
            ..self.clone()
        })
    }

    /// Enter the review phase. Pure view transition; the cart may be empty.
    pub fn finalize(&self) -> Result<SessionState, SessionError> {
        self.require_phase(Phase::Shopping)?;

        Ok(SessionState {
            phase: Phase::ReviewingFinalList,
            ..self.clone()
        })
    }

    /// Leave the review phase and return to shopping. Pure view transition.
    pub fn close_review(&self) -> Result<SessionState, SessionError> {
        self.require_phase(Phase::ReviewingFinalList)?;

        Ok(SessionState {
            phase: Phase::Shopping,
            ..self.clone()
        })
    }

    fn require_phase(&self, expected: Phase) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
