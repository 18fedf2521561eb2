//! Market report - the presentation boundary
//!
//! Rows hold exact values straight from the exchange. Rounding (half-up)
//! only happens when the report is rendered.

use gbce_core::money::{format_optional, format_percent, format_pounds, pennies, round_half_up};
use gbce_core::{Pennies, StockSpec, StockType, Symbol, Timestamp};
use gbce_exchange::{Exchange, Result};
use rust_decimal::Decimal;
use std::fmt;

/// Statistics for one listed stock
#[derive(Debug, Clone, PartialEq)]
pub struct StockRow {
    pub symbol: Symbol,
    pub stock_type: StockType,
    /// Dividend yield in percent
    pub dividend_yield: Option<Decimal>,
    pub pe_ratio: Option<Decimal>,
    /// Volume-weighted stock price in pennies
    pub vwsp: Option<Decimal>,
    pub trade_count: usize,
}

/// Snapshot of every listed stock and the all-share index
#[derive(Debug, Clone, PartialEq)]
pub struct MarketReport {
    pub as_of: Timestamp,
    /// Market price the yields and ratios were evaluated at, in pennies
    pub market_price: Pennies,
    /// Fractional digits used when rendering
    pub precision: u32,
    pub rows: Vec<StockRow>,
    /// All-share index in pennies
    pub index: Option<Decimal>,
}

impl MarketReport {
    /// Evaluate every listed stock at `market_price` and its VWSP as of `as_of`
    pub fn build(
        exchange: &Exchange,
        market_price: Pennies,
        as_of: Timestamp,
        precision: u32,
    ) -> Result<Self> {
        let rows = exchange
            .securities()
            .iter()
            .map(|security| -> Result<StockRow> {
                Ok(StockRow {
                    symbol: security.symbol().clone(),
                    stock_type: security.spec().stock_type(),
                    dividend_yield: security.dividend_yield(market_price)?,
                    pe_ratio: security.pe_ratio(market_price)?,
                    vwsp: security.volume_weighted_stock_price(as_of, exchange.vwsp_window())?,
                    trade_count: security.trade_count(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            as_of,
            market_price,
            precision,
            rows,
            index: exchange.gbce_all_share_index(as_of)?,
        })
    }

    /// Look up the row for a symbol
    pub fn row(&self, symbol: &str) -> Option<&StockRow> {
        self.rows.iter().find(|row| row.symbol.as_str() == symbol)
    }

    fn pounds(&self, value: Option<Decimal>) -> String {
        format_optional(value, |v| format_pounds(v, self.precision))
    }

    fn percent(&self, value: Option<Decimal>) -> String {
        format_optional(value, |v| format_percent(v, self.precision))
    }

    fn ratio(&self, value: Option<Decimal>) -> String {
        let dp = self.precision as usize;
        format_optional(value, |v| format!("{:.*}", dp, round_half_up(v, self.precision)))
    }
}

impl fmt::Display for MarketReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "GBCE market report as of {} (market price {})",
            self.as_of.format("%Y-%m-%d %H:%M:%S UTC"),
            format_pounds(pennies(self.market_price), self.precision)
        )?;
        writeln!(
            f,
            "{:<8}{:<11}{:>10}{:>12}{:>12}{:>8}",
            "SYMBOL", "TYPE", "YIELD", "P/E", "VWSP", "TRADES"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<8}{:<11}{:>10}{:>12}{:>12}{:>8}",
                row.symbol.as_str(),
                row.stock_type.to_string(),
                self.percent(row.dividend_yield),
                self.ratio(row.pe_ratio),
                self.pounds(row.vwsp),
                row.trade_count
            )?;
        }
        write!(f, "GBCE All-Share Index: {}", self.pounds(self.index))
    }
}
