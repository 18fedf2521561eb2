//! GBCE Clock Infrastructure
//!
//! Time sources for the exchange:
//!
//! - [`SystemClock`]: wall-clock time for production use
//! - [`ManualClock`]: frozen time that only moves when told to, so trade
//!   timestamps and VWSP windows are deterministic in tests
//!
//! ## Usage
//!
//! ```ignore
//! use gbce_clock::ManualClock;
//! use chrono::Duration;
//!
//! let clock = ManualClock::new(None);
//! let t0 = clock.now();
//! clock.advance(Duration::minutes(5)); // jump forward
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use gbce_ports::Clock;
