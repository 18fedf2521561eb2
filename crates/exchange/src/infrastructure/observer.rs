use gbce_core::Trade;
use gbce_core::money::{DISPLAY_PRECISION, format_pounds, pennies};
use gbce_ports::TradeObserver;
use log::info;

/// Trade observer that writes every recorded trade to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTradeObserver;

impl TradeObserver for LogTradeObserver {
    fn on_trade(&self, trade: &Trade) {
        info!(
            "Recorded {} trade: {} shares of {} @ {}",
            trade.side(),
            trade.quantity(),
            trade.symbol(),
            format_pounds(pennies(trade.price()), DISPLAY_PRECISION)
        );
    }
}

