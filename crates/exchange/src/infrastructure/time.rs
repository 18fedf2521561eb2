// Re-export clock adapters so callers only depend on this crate
pub use gbce_clock::{Clock, ManualClock, SystemClock};

use std::sync::Arc;

/// Wall-clock time source for production use
pub fn system_clock() -> Arc<dyn Clock> {
    Arc::new(SystemClock::new())
}
