//! GBCE Exchange
//!
//! Registry of listed stocks for the Global Beverage Corporation Exchange.
//! Each stock owns an append-only trade log; the exchange combines their
//! volume-weighted prices into the GBCE All-Share Index.

// Application layer
pub mod application;

// Infrastructure layer
pub mod infrastructure;

// Cross-cutting concerns
pub mod config;
pub mod error;
pub mod model;

// Re-export main types for convenience
pub use application::{Exchange, Security};
pub use config::{ExchangeConfig, SecurityConfig};
pub use error::{ExchangeError, Result};
pub use infrastructure::{LogTradeObserver, time};
