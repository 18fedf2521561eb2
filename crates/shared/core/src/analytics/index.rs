use rust_decimal::{Decimal, MathematicalOps};

use crate::error::{DomainError, DomainResult};

/// Geometric mean of strictly positive values, as `exp(mean(ln(v)))`
///
/// An empty input has no mean and yields `None`. A non-positive value is an
/// invariant violation rather than missing data and is returned as an error.
pub fn geometric_mean(values: &[Decimal]) -> DomainResult<Option<Decimal>> {
    if values.is_empty() {
        return Ok(None);
    }

    if let Some(bad) = values.iter().find(|v| **v <= Decimal::ZERO) {
        return Err(DomainError::InvariantViolation(format!(
            "geometric mean requires positive values, got {bad}"
        )));
    }

    let log_sum: Decimal = values.iter().map(|v| v.ln()).sum();
    let mean = log_sum / Decimal::from(values.len());

    mean.checked_exp().map(Some).ok_or_else(|| {
        DomainError::InvariantViolation(format!("exp({mean}) overflowed"))
    })
}
