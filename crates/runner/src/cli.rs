//! CLI definition and dispatch for the `gbce` binary

use clap::{Parser, Subcommand};
use gbce_core::{Pennies, StockSpec};
use gbce_exchange::time::system_clock;
use gbce_exchange::{ExchangeConfig, Result};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::bootstrap::bootstrap;
use crate::report::MarketReport;
use crate::trade_feed::{demo_feed, feed_trades, load_feed};

#[derive(Parser, Debug)]
#[command(name = "gbce", about = "Global Beverage Corporation Exchange")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Feed trades and print yields, P/E, VWSP and the all-share index
    Report {
        /// Exchange configuration (JSON); defaults to the GBCE sample catalog
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Market price in pennies used for yield and P/E
        #[arg(short, long, default_value_t = 10000)]
        price: Pennies,
        /// Trade feed (JSON array); defaults to the demo trades
        #[arg(short, long)]
        feed: Option<PathBuf>,
        /// Override the VWSP window, in seconds
        #[arg(long)]
        window_secs: Option<i64>,
    },
    /// List the configured stocks
    List {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let outcome = match cli.command {
        Command::Report {
            config,
            price,
            feed,
            window_secs,
        } => run_report(config.as_ref(), price, feed.as_ref(), window_secs),
        Command::List { config } => run_list(config.as_ref()),
    };

    match outcome {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<ExchangeConfig> {
    match path {
        Some(path) => ExchangeConfig::from_file(path),
        None => Ok(ExchangeConfig::gbce_sample()),
    }
}

/// Build the report text for the `report` command
pub fn run_report(
    config: Option<&PathBuf>,
    price: Pennies,
    feed: Option<&PathBuf>,
    window_secs: Option<i64>,
) -> Result<String> {
    let mut config = load_config(config)?;
    if let Some(secs) = window_secs {
        config.vwsp_window_secs = secs;
        config.validate()?;
    }

    let entries = match feed {
        Some(path) => load_feed(path)?,
        None => demo_feed(),
    };

    let exchange = bootstrap(&config, system_clock())?;
    let trades = feed_trades(&exchange, &entries)?;
    log::info!("Applied {} trades", trades.len());

    let report = MarketReport::build(
        &exchange,
        price,
        exchange.current_time(),
        config.display_precision,
    )?;
    Ok(report.to_string())
}

/// Build the listing text for the `list` command
pub fn run_list(config: Option<&PathBuf>) -> Result<String> {
    let config = load_config(config)?;
    let exchange = bootstrap(&config, system_clock())?;

    let lines: Vec<String> = exchange
        .securities()
        .iter()
        .map(|security| {
            let spec = security.spec();
            let rate = spec
                .fixed_dividend_rate()
                .map(|r| format!(" fixed rate {}%", r * Decimal::ONE_HUNDRED))
                .unwrap_or_default();
            format!(
                "{} {} last dividend {}p par value {}p{}",
                security.symbol(),
                spec.stock_type(),
                spec.last_dividend(),
                spec.par_value(),
                rate
            )
        })
        .collect();
    Ok(lines.join("\n"))
}
