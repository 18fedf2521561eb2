//! Integration tests: Exchange registry, trade logs and the all-share index
//!
//! Time is driven through a ManualClock so windows are deterministic.

use chrono::{Duration, TimeZone, Utc};
use gbce_exchange::model::{Side, StockSpec, StockType};
use gbce_exchange::time::{Clock, ManualClock};
use gbce_exchange::{Exchange, ExchangeConfig, ExchangeError, LogTradeObserver};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::thread;

fn sample_exchange() -> (Exchange, Arc<ManualClock>) {
    let _ = env_logger::try_init();
    let clock = ManualClock::new(Some(Utc.with_ymd_and_hms(2024, 6, 3, 8, 0, 0).unwrap()));
    let exchange = Exchange::with_config(
        clock.clone(),
        Arc::new(LogTradeObserver),
        &ExchangeConfig::gbce_sample(),
    )
    .expect("sample catalog is valid");
    (exchange, clock)
}

fn assert_close(actual: Decimal, expected: Decimal) {
    assert!(
        (actual - expected).abs() < dec!(0.01),
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_sample_catalog_is_listed() {
    let (exchange, _) = sample_exchange();

    let symbols: Vec<String> = exchange
        .stock_symbols()
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(symbols, vec!["ALE", "GIN", "JOE", "POP", "TEA"]);

    let gin = exchange.get_stock("GIN").unwrap();
    assert_eq!(gin.spec().stock_type(), StockType::Preferred);
    assert_eq!(gin.spec().fixed_dividend_rate(), Some(dec!(0.02)));
    assert_eq!(gin.spec().par_value(), 10000);
}

#[test]
fn test_tea_yield_and_pe_ratio() {
    let (exchange, _) = sample_exchange();
    let tea = exchange.get_stock("TEA").unwrap();

    assert_eq!(tea.dividend_yield(10000).unwrap(), Some(Decimal::ZERO));
    assert_eq!(tea.pe_ratio(10000).unwrap(), None);
}

#[test]
fn test_gin_fixed_rate_yield() {
    let (exchange, _) = sample_exchange();
    let gin = exchange.get_stock("GIN").unwrap();

    assert_eq!(gin.dividend_yield(10000).unwrap(), Some(dec!(20)));
    assert_eq!(gin.pe_ratio(10000).unwrap(), Some(dec!(1250)));
}

#[test]
fn test_non_positive_market_price_fails() {
    let (exchange, _) = sample_exchange();

    for symbol in ["TEA", "POP", "GIN"] {
        let stock = exchange.get_stock(symbol).unwrap();
        assert!(matches!(
            stock.dividend_yield(0),
            Err(ExchangeError::InvalidPrice(0))
        ));
        assert!(matches!(
            stock.pe_ratio(-100),
            Err(ExchangeError::InvalidPrice(-100))
        ));
    }
}

#[test]
fn test_vwsp_for_recorded_trades() {
    let (exchange, clock) = sample_exchange();
    let tea = exchange.get_stock("TEA").unwrap();

    let first = tea.record_trade(1000, Side::Buy, 9550).unwrap();
    assert_eq!(
        tea.volume_weighted_stock_price(first.timestamp(), exchange.vwsp_window())
            .unwrap(),
        Some(dec!(9550))
    );

    clock.advance(Duration::seconds(30));
    tea.record_trade(2000, Side::Sell, 10230).unwrap();

    let vwsp = tea.vwsp_now().unwrap().unwrap();
    assert_eq!(vwsp, dec!(30010000) / dec!(3000));
    assert_eq!(tea.trade_count(), 2);
}

#[test]
fn test_index_over_sample_trades() {
    let (exchange, clock) = sample_exchange();

    assert_eq!(exchange.all_share_index_now().unwrap(), None);

    exchange.record_trade("TEA", 1000, Side::Buy, 9550).unwrap();
    exchange.record_trade("GIN", 200, Side::Sell, 10000).unwrap();

    let index = exchange.gbce_all_share_index(clock.now()).unwrap().unwrap();
    assert_close(index, (dec!(9550) * dec!(10000)).sqrt().unwrap());
    assert_close(index, dec!(9772.41));

    // Once every trade is older than the window the index is undefined again
    clock.advance(Duration::minutes(6));
    assert_eq!(exchange.all_share_index_now().unwrap(), None);
}

#[test]
fn test_duplicate_listing_keeps_original() {
    let (exchange, _) = sample_exchange();

    let err = exchange.create_common_stock("TEA", 99, 100).unwrap_err();
    assert!(matches!(err, ExchangeError::DuplicateSymbol(_)));
    assert_eq!(err.to_string(), "Symbol already listed: TEA");
    assert_eq!(exchange.get_stock("TEA").unwrap().spec().last_dividend(), 0);
    assert_eq!(exchange.len(), 5);
}

#[test]
fn test_concurrent_recording_across_stocks() {
    let (exchange, clock) = sample_exchange();
    let exchange = Arc::new(exchange);

    let handles: Vec<_> = ["TEA", "POP", "ALE", "GIN", "JOE"]
        .into_iter()
        .map(|symbol| {
            let exchange = exchange.clone();
            thread::spawn(move || {
                for i in 1..=100 {
                    exchange
                        .record_trade(symbol, i, Side::Buy, 1000)
                        .expect("valid trade");
                }
            })
        })
        .collect();

    // Readers run alongside the writers
    for _ in 0..50 {
        let _ = exchange.gbce_all_share_index(clock.now()).unwrap();
    }

    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    for stock in exchange.securities() {
        assert_eq!(stock.trade_count(), 100);
        assert_eq!(stock.vwsp_now().unwrap(), Some(dec!(1000)));
    }
    assert_close(exchange.all_share_index_now().unwrap().unwrap(), dec!(1000));
}
