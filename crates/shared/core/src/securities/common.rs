use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{StockSpec, StockType, validate_attributes};
use crate::error::DomainResult;
use crate::money::pennies;
use crate::values::{Pennies, Symbol};

/// Common stock: the dividend per share is the last dividend paid
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommonStock {
    symbol: Symbol,
    last_dividend: Pennies,
    par_value: Pennies,
}

impl CommonStock {
    /// Create a common stock, validating its attributes
    pub fn new(symbol: Symbol, last_dividend: Pennies, par_value: Pennies) -> DomainResult<Self> {
        validate_attributes(last_dividend, par_value)?;
        Ok(Self {
            symbol,
            last_dividend,
            par_value,
        })
    }
}

impl StockSpec for CommonStock {
    fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    fn stock_type(&self) -> StockType {
        StockType::Common
    }

    fn last_dividend(&self) -> Pennies {
        self.last_dividend
    }

    fn par_value(&self) -> Pennies {
        self.par_value
    }

    fn dividend_per_share(&self) -> Decimal {
        pennies(self.last_dividend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn stock(symbol: &str, last_dividend: Pennies, par_value: Pennies) -> CommonStock {
        CommonStock::new(Symbol::parse(symbol).unwrap(), last_dividend, par_value).unwrap()
    }

    #[test]
    fn test_zero_dividend_stock() {
        let tea = stock("TEA", 0, 10000);

        assert_eq!(tea.stock_type(), StockType::Common);
        assert_eq!(tea.dividend_yield(10000).unwrap(), Some(dec!(0)));
        assert_eq!(tea.pe_ratio(10000).unwrap(), None);
    }

    #[test]
    fn test_dividend_yield_and_pe_ratio() {
        let pop = stock("POP", 8, 10000);

        assert_eq!(pop.dividend_yield(10000).unwrap(), Some(dec!(0.08)));
        assert_eq!(pop.pe_ratio(10000).unwrap(), Some(dec!(1250)));

        let ale = stock("ALE", 23, 6000);
        let yield_pct = ale.dividend_yield(6000).unwrap().unwrap();
        assert_eq!(yield_pct.round_dp(4), dec!(0.3833));
    }

    #[test]
    fn test_non_positive_price_is_rejected() {
        let pop = stock("POP", 8, 10000);

        assert_eq!(pop.dividend_yield(0), Err(DomainError::InvalidPrice(0)));
        assert_eq!(pop.pe_ratio(-1), Err(DomainError::InvalidPrice(-1)));
    }

    #[test]
    fn test_invalid_attributes() {
        let sym = Symbol::parse("BAD").unwrap();
        assert!(matches!(
            CommonStock::new(sym.clone(), -1, 100),
            Err(DomainError::InvalidParameter(_))
        ));
        assert!(matches!(
            CommonStock::new(sym, 0, 0),
            Err(DomainError::InvalidParameter(_))
        ));
    }

    proptest! {
        #[test]
        fn pe_ratio_absent_iff_zero_dividend(
            last_dividend in 0i64..10_000,
            market_price in 1i64..1_000_000,
        ) {
            let stock = stock("JOE", last_dividend, 25000);
            let ratio = stock.pe_ratio(market_price).unwrap();

            if last_dividend == 0 {
                prop_assert_eq!(ratio, None);
            } else {
                prop_assert_eq!(
                    ratio,
                    Some(Decimal::from(market_price) / Decimal::from(last_dividend))
                );
            }
        }

        #[test]
        fn non_positive_price_always_rejected(market_price in -1_000_000i64..=0) {
            let stock = stock("JOE", 13, 25000);

            prop_assert_eq!(
                stock.pe_ratio(market_price),
                Err(DomainError::InvalidPrice(market_price))
            );
            prop_assert_eq!(
                stock.dividend_yield(market_price),
                Err(DomainError::InvalidPrice(market_price))
            );
        }
    }
}
