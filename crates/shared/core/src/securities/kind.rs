use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CommonStock, PreferredStock, StockSpec};
use crate::values::{Pennies, Symbol};

/// Stock classification for dividend calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockType {
    Common,
    Preferred,
}

impl std::fmt::Display for StockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockType::Common => write!(f, "Common"),
            StockType::Preferred => write!(f, "Preferred"),
        }
    }
}

/// Enumeration of all listed stock kinds
///
/// The set is closed: each variant carries its full specification and
/// `StockSpec` calls delegate to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockKind {
    Common(CommonStock),
    Preferred(PreferredStock),
}

impl StockKind {
    /// Fixed dividend rate, for preferred stock only
    pub fn fixed_dividend_rate(&self) -> Option<Decimal> {
        match self {
            StockKind::Common(_) => None,
            StockKind::Preferred(p) => Some(p.fixed_dividend_rate()),
        }
    }
}

impl StockSpec for StockKind {
    fn symbol(&self) -> &Symbol {
        match self {
            StockKind::Common(c) => c.symbol(),
            StockKind::Preferred(p) => p.symbol(),
        }
    }

    fn stock_type(&self) -> StockType {
        match self {
            StockKind::Common(c) => c.stock_type(),
            StockKind::Preferred(p) => p.stock_type(),
        }
    }

    fn last_dividend(&self) -> Pennies {
        match self {
            StockKind::Common(c) => c.last_dividend(),
            StockKind::Preferred(p) => p.last_dividend(),
        }
    }

    fn par_value(&self) -> Pennies {
        match self {
            StockKind::Common(c) => c.par_value(),
            StockKind::Preferred(p) => p.par_value(),
        }
    }

    fn dividend_per_share(&self) -> Decimal {
        match self {
            StockKind::Common(c) => c.dividend_per_share(),
            StockKind::Preferred(p) => p.dividend_per_share(),
        }
    }
}

impl From<CommonStock> for StockKind {
    fn from(stock: CommonStock) -> Self {
        StockKind::Common(stock)
    }
}

impl From<PreferredStock> for StockKind {
    fn from(stock: PreferredStock) -> Self {
        StockKind::Preferred(stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_kind_from_common() {
        let tea = CommonStock::new(Symbol::parse("TEA").unwrap(), 0, 10000).unwrap();
        let kind: StockKind = tea.into();

        assert_eq!(kind.stock_type(), StockType::Common);
        assert_eq!(kind.fixed_dividend_rate(), None);
        assert_eq!(kind.symbol().as_str(), "TEA");
    }

    #[test]
    fn test_kind_delegation() {
        let gin = PreferredStock::new(Symbol::parse("GIN").unwrap(), 8, dec!(0.02), 10000).unwrap();
        let kind: StockKind = gin.clone().into();

        assert_eq!(kind.stock_type(), StockType::Preferred);
        assert_eq!(kind.fixed_dividend_rate(), Some(dec!(0.02)));
        assert_eq!(kind.last_dividend(), gin.last_dividend());
        assert_eq!(kind.par_value(), gin.par_value());
        assert_eq!(kind.dividend_yield(10000), gin.dividend_yield(10000));
        assert_eq!(kind.pe_ratio(10000), gin.pe_ratio(10000));
    }

    #[test]
    fn test_stock_type_display() {
        assert_eq!(StockType::Common.to_string(), "Common");
        assert_eq!(StockType::Preferred.to_string(), "Preferred");
    }
}
