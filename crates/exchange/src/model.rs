// Re-export domain types from gbce-core so callers need a single import
pub use gbce_core::{
    CommonStock, DomainError, Pennies, PreferredStock, Quantity, Side, StockKind, StockSpec,
    StockType, Symbol, Timestamp, Trade, TradeId,
};
