use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::StockType;
use crate::error::{DomainError, DomainResult};
use crate::money::{pennies, safe_divide};
use crate::values::{Pennies, Symbol};

/// Specification trait shared by every listed stock
///
/// Implementors only supply their static attributes and the dividend per
/// share; the yield and ratio formulas are common.
pub trait StockSpec {
    /// Ticker symbol (e.g., "TEA")
    fn symbol(&self) -> &Symbol;

    /// Which kind of stock this is
    fn stock_type(&self) -> StockType;

    /// Last dividend paid, in pennies
    fn last_dividend(&self) -> Pennies;

    /// Par value, in pennies
    fn par_value(&self) -> Pennies;

    /// Dividend per share used by the yield formula, in pennies
    fn dividend_per_share(&self) -> Decimal;

    /// Dividend yield as a percentage of the market price
    ///
    /// Fails with `InvalidPrice` for a non-positive price.
    fn dividend_yield(&self, market_price: Pennies) -> DomainResult<Option<Decimal>> {
        let price = validate_market_price(market_price)?;
        Ok(safe_divide(self.dividend_per_share() * dec!(100), price))
    }

    /// Price / earnings ratio, using the last dividend as earnings
    ///
    /// `None` when the last dividend is zero.
    fn pe_ratio(&self, market_price: Pennies) -> DomainResult<Option<Decimal>> {
        let price = validate_market_price(market_price)?;
        Ok(safe_divide(price, pennies(self.last_dividend())))
    }
}

fn validate_market_price(market_price: Pennies) -> DomainResult<Decimal> {
    if market_price <= 0 {
        return Err(DomainError::InvalidPrice(market_price));
    }
    Ok(pennies(market_price))
}
