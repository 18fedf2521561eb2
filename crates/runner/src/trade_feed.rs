//! Trade Feed - applies already-agreed trades to the exchange

use gbce_core::{Pennies, Quantity, Side, Trade};
use gbce_exchange::{Exchange, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One executed trade as supplied by an external feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub symbol: String,
    pub quantity: Quantity,
    pub side: Side,
    /// Price per share in pennies
    pub price: Pennies,
}

impl FeedEntry {
    pub fn new(symbol: &str, quantity: Quantity, side: Side, price: Pennies) -> Self {
        Self {
            symbol: symbol.to_string(),
            quantity,
            side,
            price,
        }
    }
}

/// The demo trades: TEA bought at £95.50 and sold at £102.30
pub fn demo_feed() -> Vec<FeedEntry> {
    vec![
        FeedEntry::new("TEA", 1000, Side::Buy, 9550),
        FeedEntry::new("TEA", 2000, Side::Sell, 10230),
    ]
}

/// Load a JSON array of feed entries
pub fn load_feed(path: impl AsRef<Path>) -> Result<Vec<FeedEntry>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Record each entry in order, stopping at the first rejected trade
///
/// Entries before the failing one stay recorded.
pub fn feed_trades(exchange: &Exchange, entries: &[FeedEntry]) -> Result<Vec<Trade>> {
    entries
        .iter()
        .map(|entry| exchange.record_trade(&entry.symbol, entry.quantity, entry.side, entry.price))
        .collect()
}
