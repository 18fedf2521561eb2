//! Trade analytics
//!
//! - **VWSP**: volume-weighted stock price over a trailing window
//! - **Geometric mean**: combines per-stock prices into the all-share index

mod index;
mod vwsp;

pub use index::geometric_mean;
pub use vwsp::{DEFAULT_VWSP_WINDOW_SECS, default_vwsp_window, volume_weighted_price};
