//! Listed stock definitions
//!
//! The exchange lists two kinds of stock, which differ only in how the
//! dividend per share is derived:
//! - Common stock pays its last dividend
//! - Preferred stock pays a fixed rate on its par value

mod common;
mod kind;
mod preferred;
mod spec;

pub use common::CommonStock;
pub use kind::{StockKind, StockType};
pub use preferred::PreferredStock;
pub use spec::StockSpec;

use crate::error::{DomainError, DomainResult};
use crate::values::Pennies;

/// Attribute checks shared by every stock kind
fn validate_attributes(last_dividend: Pennies, par_value: Pennies) -> DomainResult<()> {
    if last_dividend < 0 {
        return Err(DomainError::InvalidParameter(format!(
            "last dividend cannot be negative, got {last_dividend}"
        )));
    }
    if par_value <= 0 {
        return Err(DomainError::InvalidParameter(format!(
            "par value must be positive, got {par_value}"
        )));
    }
    Ok(())
}
