use tickerlog_core::{Candle, Currency, HistoryResponse, IsoCurrency, Money};

pub fn by_symbol(s: &str) -> Option<HistoryResponse> {
    match s {
        "AAPL" => Some(build(vec![
            ("2024-04-01", "170.03", "171.25", "169.48", "170.03", 46_240_500),
            ("2024-04-02", "169.08", "169.34", "168.23", "168.84", 49_329_500),
            ("2024-04-03", "168.79", "170.68", "168.58", "169.65", 47_691_700),
            ("2024-04-04", "170.29", "171.92", "168.82", "168.82", 53_704_400),
            ("2024-04-05", "169.59", "170.39", "168.95", "169.58", 42_055_200),
        ])),
        "MSFT" => Some(build(vec![
            ("2024-04-01", "423.95", "427.89", "422.22", "424.57", 16_316_000),
            ("2024-04-02", "420.11", "422.38", "417.84", "421.44", 17_861_900),
            ("2024-04-03", "419.73", "423.26", "419.09", "420.45", 16_502_300),
        ])),
        "GOOGL" => Some(build(vec![
            ("2024-04-01", "151.83", "157.00", "151.65", "156.50", 43_223_500),
            ("2024-04-02", "154.75", "155.99", "153.46", "155.87", 28_421_900),
            ("2024-04-03", "154.92", "156.55", "154.13", "154.92", 24_877_400),
        ])),
        "AMZN" => Some(build(vec![
            ("2024-04-01", "180.79", "183.00", "179.95", "180.97", 29_174_500),
            ("2024-04-02", "179.07", "180.79", "178.38", "180.69", 32_611_500),
            ("2024-04-03", "179.90", "182.87", "179.80", "182.41", 31_046_600),
        ])),
        "TSLA" => Some(build(vec![
            ("2024-04-01", "176.17", "176.75", "170.21", "175.22", 81_562_100),
            ("2024-04-02", "164.75", "167.69", "163.43", "166.63", 116_650_600),
            ("2024-04-03", "164.02", "168.82", "163.28", "168.38", 82_950_100),
        ])),
        // Valid symbol with no trading data in the window
        "EMPTY" => Some(build(vec![])),
        _ => None,
    }
}

fn usd(s: &str) -> Money {
    Money::from_canonical_str(s, Currency::Iso(IsoCurrency::USD))
        .expect("fixture amounts are valid decimals")
}

fn build(rows: Vec<(&str, &str, &str, &str, &str, u64)>) -> HistoryResponse {
    let candles = rows
        .into_iter()
        .map(|(date, o, h, l, c, v)| Candle {
            ts: chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .expect("fixture dates are valid")
                .and_hms_opt(0, 0, 0)
                .expect("midnight is valid")
                .and_utc(),
            open: usd(o),
            high: usd(h),
            low: usd(l),
            close: usd(c),
            close_unadj: None,
            volume: Some(v),
        })
        .collect();
    HistoryResponse {
        candles,
        actions: vec![],
        adjusted: false,
        meta: None,
    }
}
