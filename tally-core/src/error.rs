//! Error types for tally-core

use thiserror::Error;

use crate::money::Money;
use crate::session::Phase;

/// Errors raised by session operations.
///
/// Every variant is a recoverable notification: the operation is rejected,
/// the caller surfaces the condition to the user, and the prior state stands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("invalid budget {0:?}: enter a positive amount")]
    InvalidBudget(String),

    #[error("budget exceeded: adding {cost} to {spent} passes the {budget} budget")]
    BudgetExceeded {
        cost: Money,
        spent: Money,
        budget: Money,
    },

    #[error("cart index {index} out of range (cart has {len} lines)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("operation requires {expected:?} phase, session is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },
}

/// Errors from loading the catalog data set.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from parsing monetary text input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    #[error("empty amount")]
    Empty,

    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("at most two decimal places are supported: {0:?}")]
    TooPrecise(String),

    #[error("amount too large: {0:?}")]
    Overflow(String),
}
