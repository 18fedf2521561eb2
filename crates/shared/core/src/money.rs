//! Money and decimal helpers
//!
//! Internal computation stays exact. Rounding happens only when a value is
//! presented, and always uses round-half-up (`MidpointAwayFromZero`), never
//! banker's rounding.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::values::Pennies;

/// Pennies per pound
pub const PENNIES_PER_POUND: Decimal = dec!(100);

/// Fractional digits used when displaying pounds and percentages
pub const DISPLAY_PRECISION: u32 = 2;

/// Divide, returning `None` instead of failing when the denominator is zero
///
/// `None` means "undefined", which callers must not treat as zero.
/// Overflow of the quotient is also reported as `None`.
pub fn safe_divide(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator.is_zero() {
        return None;
    }
    numerator.checked_div(denominator)
}

/// Round to `dp` fractional digits, halves away from zero
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Whole pennies as an exact decimal
pub fn pennies(value: Pennies) -> Decimal {
    Decimal::from(value)
}

/// Convert an exact penny amount to pounds without rounding
pub fn pennies_to_pounds(value: Decimal) -> Decimal {
    value / PENNIES_PER_POUND
}

/// Render a penny amount as pounds, e.g. `£95.50`
pub fn format_pounds(value: Decimal, dp: u32) -> String {
    let pounds = round_half_up(pennies_to_pounds(value), dp);
    format!("£{:.*}", dp as usize, pounds)
}

/// Render a percentage, e.g. `20.00%`
pub fn format_percent(value: Decimal, dp: u32) -> String {
    format!("{:.*}%", dp as usize, round_half_up(value, dp))
}

/// Render an optional value, using `n/a` for an undefined result
pub fn format_optional(value: Option<Decimal>, render: impl Fn(Decimal) -> String) -> String {
    value.map(render).unwrap_or_else(|| "n/a".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_divide_zero_denominator_is_absent() {
        assert_eq!(safe_divide(dec!(10000), Decimal::ZERO), None);
        assert_eq!(safe_divide(Decimal::ZERO, Decimal::ZERO), None);
    }

    #[test]
    fn test_safe_divide_exact() {
        assert_eq!(safe_divide(dec!(10000), dec!(8)), Some(dec!(1250)));
        assert_eq!(safe_divide(dec!(1), dec!(4)), Some(dec!(0.25)));
    }

    #[test]
    fn test_round_half_up_not_bankers() {
        assert_eq!(round_half_up(dec!(0.125), 2), dec!(0.13));
        assert_eq!(round_half_up(dec!(0.135), 2), dec!(0.14));
        assert_eq!(round_half_up(dec!(2.5), 0), dec!(3));
        assert_eq!(round_half_up(dec!(0.124), 2), dec!(0.12));
    }

    #[test]
    fn test_format_pounds() {
        assert_eq!(format_pounds(dec!(9550), 2), "£95.50");
        assert_eq!(format_pounds(dec!(9772.4137), 2), "£97.72");
        assert_eq!(format_pounds(pennies(1), 2), "£0.01");
    }

    #[test]
    fn test_format_percent_and_absent() {
        assert_eq!(format_percent(dec!(20), 2), "20.00%");
        assert_eq!(format_percent(dec!(0.0833333), 2), "0.08%");
        assert_eq!(format_optional(None, |v| format_percent(v, 2)), "n/a");
        assert_eq!(
            format_optional(Some(dec!(1250)), |v| round_half_up(v, 2).to_string()),
            "1250"
        );
    }
}
