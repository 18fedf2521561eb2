use chrono::Duration;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use gbce_core::{
    CommonStock, Pennies, PreferredStock, Quantity, Side, StockKind, StockSpec, Symbol, Timestamp,
    Trade, default_vwsp_window, geometric_mean,
};
use gbce_ports::{Clock, TradeObserver};
use log::{debug, error, info};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::Security;
use crate::config::{ExchangeConfig, SecurityConfig};
use crate::error::{ExchangeError, Result};
use crate::infrastructure::LogTradeObserver;

/// Registry of listed stocks and the all-share index over them
///
/// Stocks are only ever added; a symbol, once listed, always resolves to
/// the same [`Security`].
pub struct Exchange {
    /// Listed stocks by symbol
    securities: DashMap<Symbol, Arc<Security>>,

    /// Time source for trade timestamps and "now" queries
    clock: Arc<dyn Clock>,

    /// Hook notified of every recorded trade
    observer: Arc<dyn TradeObserver>,

    /// Trailing window for VWSP and the index
    vwsp_window: Duration,
}

impl Exchange {
    /// Create an empty exchange that logs recorded trades
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_observer(clock, Arc::new(LogTradeObserver))
    }

    /// Create an empty exchange with a custom trade observer
    pub fn with_observer(clock: Arc<dyn Clock>, observer: Arc<dyn TradeObserver>) -> Self {
        Self::with_vwsp_window(clock, observer, default_vwsp_window())
    }

    /// Create an empty exchange with a custom VWSP window
    ///
    /// The window is fixed for the lifetime of the exchange, so every stock
    /// and the index agree on it.
    pub fn with_vwsp_window(
        clock: Arc<dyn Clock>,
        observer: Arc<dyn TradeObserver>,
        vwsp_window: Duration,
    ) -> Self {
        Self {
            securities: DashMap::new(),
            clock,
            observer,
            vwsp_window,
        }
    }

    /// Create an exchange and list every stock in the configuration
    pub fn with_config(
        clock: Arc<dyn Clock>,
        observer: Arc<dyn TradeObserver>,
        config: &ExchangeConfig,
    ) -> Result<Self> {
        let exchange = Self::with_vwsp_window(clock, observer, config.vwsp_window()?);

        for security in &config.securities {
            match security {
                SecurityConfig::Common {
                    symbol,
                    last_dividend,
                    par_value,
                } => {
                    exchange.create_common_stock(symbol, *last_dividend, *par_value)?;
                }
                SecurityConfig::Preferred {
                    symbol,
                    last_dividend,
                    fixed_dividend_rate,
                    par_value,
                } => {
                    exchange.create_preferred_stock(
                        symbol,
                        *last_dividend,
                        *fixed_dividend_rate,
                        *par_value,
                    )?;
                }
            }
        }

        info!(
            "GBCE exchange initialized with {} stocks",
            exchange.securities.len()
        );
        Ok(exchange)
    }

    /// List a common stock
    pub fn create_common_stock(
        &self,
        symbol: &str,
        last_dividend: Pennies,
        par_value: Pennies,
    ) -> Result<Arc<Security>> {
        let stock = CommonStock::new(Symbol::parse(symbol)?, last_dividend, par_value)?;
        self.list(stock.into())
    }

    /// List a preferred stock with a fixed dividend rate in [0, 1]
    pub fn create_preferred_stock(
        &self,
        symbol: &str,
        last_dividend: Pennies,
        fixed_dividend_rate: Decimal,
        par_value: Pennies,
    ) -> Result<Arc<Security>> {
        let stock = PreferredStock::new(
            Symbol::parse(symbol)?,
            last_dividend,
            fixed_dividend_rate,
            par_value,
        )?;
        self.list(stock.into())
    }

    fn list(&self, spec: StockKind) -> Result<Arc<Security>> {
        let symbol = spec.symbol().clone();

        match self.securities.entry(symbol) {
            Entry::Occupied(entry) => Err(ExchangeError::DuplicateSymbol(entry.key().to_string())),
            Entry::Vacant(entry) => {
                info!("Listing {} stock {}", spec.stock_type(), entry.key());
                let security = Arc::new(Security::new(
                    spec,
                    self.clock.clone(),
                    self.observer.clone(),
                    self.vwsp_window,
                ));
                entry.insert(security.clone());
                Ok(security)
            }
        }
    }

    /// Look up a listed stock
    pub fn get_stock(&self, symbol: &str) -> Result<Arc<Security>> {
        self.securities
            .get(symbol)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ExchangeError::SymbolNotFound(symbol.to_string()))
    }

    /// Listed symbols, sorted
    pub fn stock_symbols(&self) -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = self
            .securities
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        symbols.sort();
        symbols
    }

    /// Listed stocks, sorted by symbol
    pub fn securities(&self) -> Vec<Arc<Security>> {
        let mut securities: Vec<Arc<Security>> = self
            .securities
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        securities.sort_by(|a, b| a.symbol().cmp(b.symbol()));
        securities
    }

    pub fn len(&self) -> usize {
        self.securities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.securities.is_empty()
    }

    /// Record a trade against a listed stock
    pub fn record_trade(
        &self,
        symbol: &str,
        quantity: Quantity,
        side: Side,
        price: Pennies,
    ) -> Result<Trade> {
        self.get_stock(symbol)?.record_trade(quantity, side, price)
    }

    /// GBCE All-Share Index: geometric mean of every defined VWSP as of `as_of`
    ///
    /// Stocks without trades in the window do not participate. `None` when
    /// no stock has a defined VWSP.
    pub fn gbce_all_share_index(&self, as_of: Timestamp) -> Result<Option<Decimal>> {
        let index = self
            .securities
            .iter()
            .filter_map(|entry| {
                entry
                    .value()
                    .volume_weighted_stock_price(as_of, self.vwsp_window)
                    .transpose()
            })
            .collect::<Result<Vec<Decimal>>>()
            .and_then(|prices| Ok((geometric_mean(&prices)?, prices.len())));

        let (index, contributing) = index.map_err(|e| {
            error!("All-share index as of {} failed: {}", as_of, e);
            e
        })?;

        debug!(
            "All-share index as of {}: {:?} from {} of {} stocks",
            as_of,
            index,
            contributing,
            self.securities.len()
        );
        Ok(index)
    }

    /// All-share index as of the clock's current time
    pub fn all_share_index_now(&self) -> Result<Option<Decimal>> {
        self.gbce_all_share_index(self.clock.now())
    }

    pub fn vwsp_window(&self) -> Duration {
        self.vwsp_window
    }

    /// Current exchange time
    pub fn current_time(&self) -> Timestamp {
        self.clock.now()
    }
}
