use gbce_core::Trade;

/// Port notified after a trade has been appended to a stock's log
///
/// Observers are an observability hook only; they cannot veto or alter
/// the trade.
pub trait TradeObserver: Send + Sync {
    fn on_trade(&self, trade: &Trade);
}

/// Observer that ignores every trade
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTradeObserver;

impl TradeObserver for NoopTradeObserver {
    fn on_trade(&self, _trade: &Trade) {}
}
