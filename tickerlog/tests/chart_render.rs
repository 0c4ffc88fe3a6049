mod helpers;

use helpers::{dec, series};
use proptest::prelude::*;
use rust_decimal::Decimal;
use tickerlog::chart::{
    self, Chart, ChartPresenter, GRIDLINE_COUNT, JsonPresenter, NullPresenter, padded_bounds,
};

#[test]
fn bounds_pad_ten_percent_each_side() {
    let s = series("AAPL", &["110", "100", "120", "115"]);
    let c = chart::render(&s);
    assert_eq!(c.y_min, dec("90"));
    assert_eq!(c.y_max, dec("132"));
}

#[test]
fn labels_follow_the_symbol() {
    let c = chart::render(&series("MSFT", &["420.45"]));
    assert_eq!(c.title, "MSFT Stock Price Trend");
    assert_eq!(c.x_label, "Date");
    assert_eq!(c.y_label, "Price (USD)");
    assert_eq!(c.legend, "MSFT Closing Price");
}

#[test]
fn points_keep_series_order() {
    let s = series("TSLA", &["175.22", "166.63", "168.38"]);
    let c = chart::render(&s);
    let closes: Vec<_> = c.points.iter().map(|p| p.close).collect();
    assert_eq!(closes, vec![dec("175.22"), dec("166.63"), dec("168.38")]);
    assert!(c.points.windows(2).all(|w| w[0].ts < w[1].ts));
}

#[test]
fn gridlines_span_the_bounds() {
    let c = chart::render(&series("AAPL", &["100", "120"]));
    assert_eq!(c.gridlines.len(), GRIDLINE_COUNT);
    assert_eq!(c.gridlines.first(), Some(&c.y_min));
    assert_eq!(c.gridlines.last(), Some(&c.y_max));
}

#[test]
fn vertical_gridlines_mark_each_day() {
    let s = series("AAPL", &["100", "120", "110"]);
    let c = chart::render(&s);
    let days: Vec<_> = s.points().iter().map(|p| p.ts).collect();
    assert_eq!(c.x_gridlines, days);
}

#[test]
fn flat_series_gets_one_gridline() {
    let c = chart::render(&series("AAPL", &["0"]));
    assert_eq!(c.y_min, Decimal::ZERO);
    assert_eq!(c.gridlines, vec![Decimal::ZERO]);
}

#[test]
fn json_presenter_writes_the_chart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.json");
    let c = chart::render(&series("GOOGL", &["156.50", "155.87", "154.92"]));

    JsonPresenter::new(&path).present(&c).unwrap();

    let back: Chart = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(back, c);
}

#[test]
fn json_presenter_reports_storage_errors() {
    let dir = tempfile::tempdir().unwrap();
    let c = chart::render(&series("GOOGL", &["156.50"]));
    let err = JsonPresenter::new(dir.path().join("no").join("chart.json"))
        .present(&c)
        .unwrap_err();
    assert!(matches!(err, tickerlog::TickerLogError::Storage { .. }));
}

#[test]
fn null_presenter_accepts_anything() {
    let c = chart::render(&series("AMZN", &["180.97"]));
    assert!(NullPresenter.present(&c).is_ok());
    assert_eq!(NullPresenter.name(), "none");
}

proptest! {
    #[test]
    fn bounds_bracket_every_close(cents in proptest::collection::vec(1i64..10_000_000, 1..40)) {
        let closes: Vec<String> = cents.iter().map(|c| Decimal::new(*c, 2).to_string()).collect();
        let refs: Vec<&str> = closes.iter().map(String::as_str).collect();
        let c = chart::render(&series("PROP", &refs));

        let (lo, hi) = padded_bounds(
            *c.points.iter().map(|p| &p.close).min().unwrap(),
            *c.points.iter().map(|p| &p.close).max().unwrap(),
        );
        prop_assert_eq!((c.y_min, c.y_max), (lo, hi));
        for p in &c.points {
            prop_assert!(c.y_min <= p.close && p.close <= c.y_max);
        }
    }
}
