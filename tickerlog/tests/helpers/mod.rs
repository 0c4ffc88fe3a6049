#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use tickerlog::{PricePoint, PriceSeries, TickerConnector, Tracker};
use tickerlog_core::{Calendar, Candle, Currency, HistoryResponse, IsoCurrency, Money, Symbol};

/// Construct a UTC `DateTime` at midnight for readability in tests.
pub fn day(y: i32, m: u32, d: u32) -> chrono::DateTime<chrono::Utc> {
    chrono::NaiveDate::from_ymd_opt(y, m, d)
        .expect("invalid date")
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// Midnight UTC `i` days after 2024-04-01.
pub fn nth_day(i: usize) -> chrono::DateTime<chrono::Utc> {
    day(2024, 4, 1) + chrono::Duration::days(i64::try_from(i).unwrap())
}

pub fn usd(amount: &str) -> Money {
    Money::from_canonical_str(amount, Currency::Iso(IsoCurrency::USD)).unwrap()
}

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub fn candle(ts: chrono::DateTime<chrono::Utc>, close: &str) -> Candle {
    Candle {
        ts,
        open: usd(close),
        high: usd(close),
        low: usd(close),
        close: usd(close),
        close_unadj: None,
        volume: None,
    }
}

/// History whose candles close at the given prices on consecutive days from 2024-04-01.
pub fn hist(closes: &[&str]) -> HistoryResponse {
    let candles = closes
        .iter()
        .enumerate()
        .map(|(i, c)| candle(nth_day(i), c))
        .collect();
    HistoryResponse {
        candles,
        actions: vec![],
        adjusted: false,
        meta: None,
    }
}

pub fn calendar(dates: &[chrono::DateTime<chrono::Utc>]) -> Calendar {
    Calendar {
        earnings_dates: dates.to_vec(),
        ex_dividend_date: None,
        dividend_payment_date: None,
    }
}

pub fn series(symbol: &str, closes: &[&str]) -> PriceSeries {
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, c)| PricePoint {
            ts: nth_day(i),
            close: dec(c),
        })
        .collect();
    PriceSeries::new(symbol, points).unwrap()
}

pub fn sym(s: &str) -> Symbol {
    Symbol::new(s).unwrap()
}

pub fn tracker(connector: Arc<dyn TickerConnector>) -> Tracker {
    Tracker::builder()
        .with_connector(connector)
        .provider_timeout(Duration::from_millis(100))
        .build()
        .unwrap()
}

pub fn fixture_tracker() -> Tracker {
    tracker(Arc::new(tickerlog_mock::MockConnector::new()))
}
