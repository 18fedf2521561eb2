use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{StockSpec, StockType, validate_attributes};
use crate::error::{DomainError, DomainResult};
use crate::money::pennies;
use crate::values::{Pennies, Symbol};

/// Preferred stock: pays a fixed dividend rate on par value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreferredStock {
    symbol: Symbol,
    last_dividend: Pennies,
    /// Fraction of par value paid as dividend (e.g., 0.02 = 2%)
    fixed_dividend_rate: Decimal,
    par_value: Pennies,
}

impl PreferredStock {
    /// Create a preferred stock; the rate must lie in [0, 1]
    pub fn new(
        symbol: Symbol,
        last_dividend: Pennies,
        fixed_dividend_rate: Decimal,
        par_value: Pennies,
    ) -> DomainResult<Self> {
        validate_attributes(last_dividend, par_value)?;
        if fixed_dividend_rate < Decimal::ZERO || fixed_dividend_rate > Decimal::ONE {
            return Err(DomainError::InvalidParameter(format!(
                "fixed dividend rate must be between 0 and 1, got {fixed_dividend_rate}"
            )));
        }
        Ok(Self {
            symbol,
            last_dividend,
            fixed_dividend_rate,
            par_value,
        })
    }

    pub fn fixed_dividend_rate(&self) -> Decimal {
        self.fixed_dividend_rate
    }
}

impl StockSpec for PreferredStock {
    fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    fn stock_type(&self) -> StockType {
        StockType::Preferred
    }

    fn last_dividend(&self) -> Pennies {
        self.last_dividend
    }

    fn par_value(&self) -> Pennies {
        self.par_value
    }

    fn dividend_per_share(&self) -> Decimal {
        self.fixed_dividend_rate * pennies(self.par_value)
    }
}
