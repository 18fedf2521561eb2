mod observer;
pub mod time;

pub use observer::LogTradeObserver;
