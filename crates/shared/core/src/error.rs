use thiserror::Error;

use crate::values::Pennies;

/// Domain-level validation and invariant errors
///
/// A formula that is merely undefined (zero denominator, empty window) is
/// never an error; it yields `None` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid trade: {0}")]
    InvalidTrade(String),

    #[error("Invalid market price: {0} (must be positive pennies)")]
    InvalidPrice(Pennies),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;
