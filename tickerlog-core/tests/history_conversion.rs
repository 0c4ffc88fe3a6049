use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use tickerlog_core::{
    Candle, Currency, HistoryResponse, IsoCurrency, Money, PriceSeries, TickerLogError,
};

fn usd(s: &str) -> Money {
    Money::from_canonical_str(s, Currency::Iso(IsoCurrency::USD)).unwrap()
}

fn candle(secs: i64, close: &str) -> Candle {
    Candle {
        ts: Utc.timestamp_opt(secs, 0).unwrap(),
        open: usd(close),
        high: usd(close),
        low: usd(close),
        close: usd(close),
        close_unadj: None,
        volume: None,
    }
}

fn response(candles: Vec<Candle>) -> HistoryResponse {
    HistoryResponse {
        candles,
        actions: vec![],
        adjusted: false,
        meta: None,
    }
}

#[test]
fn out_of_order_candles_are_sorted_and_last_close_is_latest() {
    let resp = response(vec![
        candle(300, "150.25"),
        candle(100, "140"),
        candle(200, "145.5"),
    ]);
    let s = PriceSeries::from_history("AAPL", &resp).unwrap();

    assert_eq!(s.len(), 3);
    assert_eq!(s.symbol(), "AAPL");
    assert_eq!(s.points()[0].ts, Utc.timestamp_opt(100, 0).unwrap());
    assert_eq!(s.last_close(), Decimal::new(15025, 2));
    assert_eq!(
        s.close_range(),
        (Decimal::from(140u32), Decimal::new(15025, 2))
    );
}

#[test]
fn empty_history_is_empty_series_error() {
    let err = PriceSeries::from_history("MSFT", &response(vec![])).unwrap_err();
    assert!(matches!(err, TickerLogError::EmptySeries { ref symbol } if symbol == "MSFT"));
    assert!(!err.is_actionable());
}
