use chrono::{DateTime, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use tickerlog_core::{PricePoint, PriceSeries, TickerLogError};

fn arb_close() -> impl Strategy<Value = Decimal> {
    // Positive prices with cent precision
    (1u64..10_000_000u64).prop_map(|cents| Decimal::new(i64::try_from(cents).unwrap(), 2))
}

fn arb_points() -> impl Strategy<Value = Vec<PricePoint>> {
    // Unique timestamps: shuffle a set of distinct day offsets
    proptest::collection::btree_set(0i64..10_000, 1..120)
        .prop_flat_map(|days| {
            let days: Vec<i64> = days.into_iter().collect();
            let n = days.len();
            (
                Just(days).prop_shuffle(),
                proptest::collection::vec(arb_close(), n),
            )
        })
        .prop_map(|(days, closes)| {
            days.into_iter()
                .zip(closes)
                .map(|(d, close)| PricePoint {
                    ts: DateTime::from_timestamp(1_600_000_000 + d * 86_400, 0).unwrap(),
                    close,
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn series_is_sorted_ascending(points in arb_points()) {
        let n = points.len();
        let s = PriceSeries::new("AAPL", points).unwrap();
        prop_assert_eq!(s.len(), n);
        prop_assert!(!s.is_empty());
        let ts: Vec<DateTime<Utc>> = s.points().iter().map(|p| p.ts).collect();
        let mut sorted = ts.clone();
        sorted.sort();
        prop_assert_eq!(ts, sorted);
    }

    #[test]
    fn last_close_is_latest_point(points in arb_points()) {
        let latest = points.iter().max_by_key(|p| p.ts).copied().unwrap();
        let s = PriceSeries::new("AAPL", points).unwrap();
        prop_assert_eq!(s.last_close(), latest.close);
        prop_assert_eq!(s.last().ts, latest.ts);
    }

    #[test]
    fn close_range_brackets_every_point(points in arb_points()) {
        let s = PriceSeries::new("AAPL", points).unwrap();
        let (lo, hi) = s.close_range();
        prop_assert!(lo <= hi);
        for p in s.points() {
            prop_assert!(lo <= p.close && p.close <= hi);
        }
        prop_assert!(s.points().iter().any(|p| p.close == lo));
        prop_assert!(s.points().iter().any(|p| p.close == hi));
    }
}

#[test]
fn empty_points_fail_fast() {
    let err = PriceSeries::new("ZZZZ", vec![]).expect_err("empty must fail");
    assert_eq!(
        err,
        TickerLogError::EmptySeries {
            symbol: "ZZZZ".to_string()
        }
    );
}
