use chrono::Duration;
use gbce_core::{
    Pennies, Quantity, Side, StockKind, StockSpec, Symbol, Timestamp, Trade,
    volume_weighted_price,
};
use gbce_ports::{Clock, TradeObserver};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::error::Result;

/// A listed stock together with its append-only trade log
///
/// The log is guarded by its own lock, so recording a trade is serialized
/// against reads of this stock only; other stocks are unaffected.
pub struct Security {
    spec: StockKind,
    trades: RwLock<Vec<Trade>>,
    clock: Arc<dyn Clock>,
    observer: Arc<dyn TradeObserver>,
    vwsp_window: Duration,
}

impl Security {
    pub fn new(
        spec: StockKind,
        clock: Arc<dyn Clock>,
        observer: Arc<dyn TradeObserver>,
        vwsp_window: Duration,
    ) -> Self {
        Self {
            spec,
            trades: RwLock::new(Vec::new()),
            clock,
            observer,
            vwsp_window,
        }
    }

    pub fn symbol(&self) -> &Symbol {
        self.spec.symbol()
    }

    /// Static attributes of the stock
    pub fn spec(&self) -> &StockKind {
        &self.spec
    }

    /// Record an executed trade, timestamped now
    ///
    /// Timestamps never go backwards within one stock: if the clock reads
    /// earlier than the previous trade, the previous timestamp is reused.
    /// Nothing is recorded when validation fails.
    pub fn record_trade(&self, quantity: Quantity, side: Side, price: Pennies) -> Result<Trade> {
        let trade = {
            let mut trades = self.trades.write();
            let now = self.clock.now();
            let timestamp = match trades.last() {
                Some(last) => now.max(last.timestamp()),
                None => now,
            };
            let trade = Trade::new(self.symbol().clone(), quantity, side, price, timestamp)?;
            trades.push(trade.clone());
            trade
        };

        self.observer.on_trade(&trade);
        Ok(trade)
    }

    /// Dividend yield (percent) at the given market price
    pub fn dividend_yield(&self, market_price: Pennies) -> Result<Option<Decimal>> {
        Ok(self.spec.dividend_yield(market_price)?)
    }

    /// P/E ratio at the given market price; `None` when the last dividend is zero
    pub fn pe_ratio(&self, market_price: Pennies) -> Result<Option<Decimal>> {
        Ok(self.spec.pe_ratio(market_price)?)
    }

    /// Volume-weighted stock price, in pennies, over `[as_of - window, as_of]`
    ///
    /// `Ok(None)` when no trade falls inside the window.
    pub fn volume_weighted_stock_price(
        &self,
        as_of: Timestamp,
        window: Duration,
    ) -> Result<Option<Decimal>> {
        Ok(volume_weighted_price(&self.trades.read(), as_of, window)?)
    }

    /// VWSP as of the clock's current time over the exchange window
    pub fn vwsp_now(&self) -> Result<Option<Decimal>> {
        self.volume_weighted_stock_price(self.clock.now(), self.vwsp_window)
    }

    pub fn vwsp_window(&self) -> Duration {
        self.vwsp_window
    }

    /// Snapshot of the trade log in recording order
    pub fn trades(&self) -> Vec<Trade> {
        self.trades.read().clone()
    }

    pub fn trade_count(&self) -> usize {
        self.trades.read().len()
    }

    pub fn last_trade(&self) -> Option<Trade> {
        self.trades.read().last().cloned()
    }
}

impl std::fmt::Debug for Security {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Security")
            .field("spec", &self.spec)
            .field("trades", &self.trade_count())
            .field("clock", &self.clock.name())
            .field("vwsp_window", &self.vwsp_window)
            .finish()
    }
}
