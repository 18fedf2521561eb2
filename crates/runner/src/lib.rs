//! GBCE Runner
//!
//! The collaborator layer around the exchange core:
//!
//! - **Bootstrap**: list the configured stocks on a fresh exchange
//! - **Trade Feed**: apply a sequence of executed trades
//! - **Report**: per-stock yield, P/E and VWSP plus the all-share index,
//!   rounded half-up for display
//! - **CLI**: the `gbce` binary
//!
//! ```text
//!   config (JSON) ──► bootstrap ──► Exchange ◄── trade feed (JSON)
//!                                      │
//!                                      ▼
//!                                MarketReport ──► stdout
//! ```

pub mod bootstrap;
pub mod cli;
pub mod report;
pub mod trade_feed;

// Re-export main types
pub use bootstrap::bootstrap;
pub use cli::{Cli, Command, run};
pub use report::{MarketReport, StockRow};
pub use trade_feed::{FeedEntry, demo_feed, feed_trades, load_feed};
