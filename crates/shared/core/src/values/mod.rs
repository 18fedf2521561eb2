use chrono::{DateTime, Utc};

mod symbol;

pub use symbol::Symbol;

/// Monetary amount in pennies (minor currency units)
///
/// Signed so that a non-positive input can be represented and rejected.
pub type Pennies = i64;

/// Number of shares
pub type Quantity = i64;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;
