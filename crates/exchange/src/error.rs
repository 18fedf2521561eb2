use gbce_core::{DomainError, Pennies};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Invalid trade: {0}")]
    InvalidTrade(String),

    #[error("Invalid market price: {0} (must be positive pennies)")]
    InvalidPrice(Pennies),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Symbol already listed: {0}")]
    DuplicateSymbol(String),

    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExchangeError>;

impl From<DomainError> for ExchangeError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidTrade(msg) => ExchangeError::InvalidTrade(msg),
            DomainError::InvalidPrice(price) => ExchangeError::InvalidPrice(price),
            DomainError::InvalidParameter(msg) => ExchangeError::InvalidParameter(msg),
            DomainError::InvariantViolation(msg) => ExchangeError::InvariantViolation(msg),
        }
    }
}

impl From<serde_json::Error> for ExchangeError {
    fn from(err: serde_json::Error) -> Self {
        ExchangeError::ConfigError(err.to_string())
    }
}
