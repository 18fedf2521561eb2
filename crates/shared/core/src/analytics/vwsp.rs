use chrono::{DateTime, Duration};
use rust_decimal::Decimal;

use crate::entities::Trade;
use crate::error::{DomainError, DomainResult};
use crate::money::safe_divide;
use crate::values::Timestamp;

/// Trailing window used for the volume-weighted stock price
pub const DEFAULT_VWSP_WINDOW_SECS: i64 = 300;

/// Default VWSP window (5 minutes)
pub fn default_vwsp_window() -> Duration {
    Duration::seconds(DEFAULT_VWSP_WINDOW_SECS)
}

/// Volume-weighted price, in pennies, of the trades in `[as_of - window, as_of]`
///
/// Both bounds are inclusive and trades after `as_of` are ignored. Sums are
/// exact integers; only the final division can produce a fraction. Returns
/// `None` when no trade falls inside the window, and `InvariantViolation`
/// when the volume outgrows what the sums can represent.
pub fn volume_weighted_price(
    trades: &[Trade],
    as_of: Timestamp,
    window: Duration,
) -> DomainResult<Option<Decimal>> {
    let cutoff = as_of
        .checked_sub_signed(window)
        .unwrap_or(DateTime::<chrono::Utc>::MIN_UTC);

    let (notional, volume) = trades
        .iter()
        .filter(|t| t.timestamp() >= cutoff && t.timestamp() <= as_of)
        .try_fold((0i128, 0i128), |(notional, volume), t| {
            Some((
                notional.checked_add(t.notional())?,
                volume.checked_add(i128::from(t.quantity()))?,
            ))
        })
        .ok_or_else(|| overflow("running sums exceed i128"))?;

    if volume == 0 {
        return Ok(None);
    }

    divide_exact(notional, volume).map(Some)
}

fn divide_exact(notional: i128, volume: i128) -> DomainResult<Decimal> {
    let divisor = to_decimal(volume)?;

    if let Ok(dividend) = Decimal::try_from_i128_with_scale(notional, 0) {
        return safe_divide(dividend, divisor).ok_or_else(|| overflow("quotient out of range"));
    }

    // Notional beyond 96 bits: split off the whole pennies, which never
    // exceed the highest traded price.
    let whole = to_decimal(notional / volume)?;
    let fraction = safe_divide(to_decimal(notional % volume)?, divisor)
        .ok_or_else(|| overflow("quotient out of range"))?;
    whole
        .checked_add(fraction)
        .ok_or_else(|| overflow("quotient out of range"))
}

fn to_decimal(value: i128) -> DomainResult<Decimal> {
    Decimal::try_from_i128_with_scale(value, 0)
        .map_err(|_| overflow(&format!("{value} does not fit a decimal")))
}

fn overflow(detail: &str) -> DomainError {
    DomainError::InvariantViolation(format!("VWSP overflow: {detail}"))
}
