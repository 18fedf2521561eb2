use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Longest ticker the exchange accepts
pub const MAX_SYMBOL_LEN: usize = 10;

/// Ticker symbol of a listed stock (e.g. "TEA", "GIN")
///
/// Always 1 to 10 ASCII uppercase letters or digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Validate and wrap a ticker
    pub fn parse(symbol: impl Into<String>) -> DomainResult<Self> {
        let symbol = symbol.into();
        if symbol.is_empty() || symbol.len() > MAX_SYMBOL_LEN {
            return Err(DomainError::InvalidParameter(format!(
                "symbol '{symbol}' must be 1-{MAX_SYMBOL_LEN} characters"
            )));
        }
        if !symbol
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(DomainError::InvalidParameter(format!(
                "symbol '{symbol}' must be uppercase letters or digits"
            )));
        }
        Ok(Self(symbol))
    }

    /// Get the symbol as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Symbol {
    type Error = DomainError;

    fn try_from(s: String) -> DomainResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = DomainError;

    fn try_from(s: &str) -> DomainResult<Self> {
        Self::parse(s)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl std::borrow::Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_accepts_tickers() {
        let symbol = Symbol::parse("TEA").unwrap();
        assert_eq!(symbol.as_str(), "TEA");
        assert_eq!(format!("{}", symbol), "TEA");
        assert!(Symbol::parse("GIN2").is_ok());
    }

    #[test]
    fn test_symbol_rejects_bad_tickers() {
        assert!(matches!(
            Symbol::parse(""),
            Err(DomainError::InvalidParameter(_))
        ));
        assert!(Symbol::parse("tea").is_err());
        assert!(Symbol::parse("TE A").is_err());
        assert!(Symbol::parse("ABCDEFGHIJK").is_err());
        assert!(Symbol::parse("ABCDEFGHIJ").is_ok());
    }
}
