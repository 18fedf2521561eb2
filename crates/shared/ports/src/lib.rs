//! GBCE Ports
//!
//! Port definitions (traits) for the GBCE exchange.
//! These define the boundaries between domain logic and infrastructure.

mod clock;
mod observer;

pub use clock::Clock;
pub use observer::{NoopTradeObserver, TradeObserver};
