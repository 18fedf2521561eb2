//! Bootstrap - exchange setup
//!
//! Builds an exchange from configuration and lists every configured stock.

use gbce_exchange::time::Clock;
use gbce_exchange::{Exchange, ExchangeConfig, LogTradeObserver, Result};
use std::sync::Arc;

/// Create an exchange with every stock in `config` listed, logging trades
pub fn bootstrap(config: &ExchangeConfig, clock: Arc<dyn Clock>) -> Result<Exchange> {
    let exchange = Exchange::with_config(clock, Arc::new(LogTradeObserver), config)?;

    for security in exchange.securities() {
        log::debug!("Listed {:?}", security);
    }

    Ok(exchange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gbce_exchange::ExchangeError;
    use gbce_exchange::time::ManualClock;

    #[test]
    fn test_bootstrap_sample_catalog() {
        let exchange = bootstrap(&ExchangeConfig::gbce_sample(), ManualClock::new(None)).unwrap();

        assert_eq!(exchange.len(), 5);
        assert!(exchange.get_stock("JOE").is_ok());
    }

    #[test]
    fn test_bootstrap_rejects_duplicate_listing() {
        let mut config = ExchangeConfig::gbce_sample();
        config.securities.push(config.securities[0].clone());

        assert!(matches!(
            bootstrap(&config, ManualClock::new(None)),
            Err(ExchangeError::DuplicateSymbol(_))
        ));
    }
}
