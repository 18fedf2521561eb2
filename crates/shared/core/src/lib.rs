//! GBCE Core Domain
//!
//! Pure domain types for the Global Beverage Corporation Exchange.
//! This crate contains no I/O and no logging, and is 100% unit testable.
//!
//! Monetary inputs are integer pennies; computed results are exact
//! [`rust_decimal::Decimal`] values, or `None` when a formula is undefined.

pub mod analytics;
pub mod entities;
pub mod error;
pub mod money;
pub mod securities;
pub mod values;

// Re-export commonly used types at crate root
pub use analytics::{DEFAULT_VWSP_WINDOW_SECS, default_vwsp_window, geometric_mean, volume_weighted_price};
pub use entities::{Side, Trade, TradeId};
pub use error::{DomainError, DomainResult};
pub use securities::{CommonStock, PreferredStock, StockKind, StockSpec, StockType};
pub use values::{Pennies, Quantity, Symbol, Timestamp};
