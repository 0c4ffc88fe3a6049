//! Closing-price chart: a pure render step and pluggable presenters.
//!
//! [`render`] turns a [`PriceSeries`] into a [`Chart`] description without touching
//! any display. A [`ChartPresenter`] then shows, saves, or discards it.

mod present;
#[cfg(feature = "window")]
mod window;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tickerlog_core::PriceSeries;

pub use present::{ChartPresenter, JsonPresenter, NullPresenter};
#[cfg(feature = "window")]
pub use window::WindowPresenter;

/// Number of horizontal gridlines drawn between the y bounds (inclusive).
pub const GRIDLINE_COUNT: usize = 6;

/// Opacity of the dashed gridlines.
pub const GRID_ALPHA: f32 = 0.7;

/// Line color as RGB.
pub const LINE_RGB: [u8; 3] = [0, 0, 255];

/// One plotted point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// X value: candle timestamp.
    pub ts: DateTime<Utc>,
    /// Y value: closing price.
    pub close: Decimal,
}

/// Renderer-agnostic description of a closing-price line chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    /// Window and figure title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Legend entry for the price line.
    pub legend: String,
    /// Points in ascending time order.
    pub points: Vec<ChartPoint>,
    /// Lower y bound (`min * 0.9`).
    pub y_min: Decimal,
    /// Upper y bound (`max * 1.1`).
    pub y_max: Decimal,
    /// Y levels of dashed gridlines, ascending.
    pub gridlines: Vec<Decimal>,
    /// X positions of dashed gridlines: one per plotted day, ascending.
    pub x_gridlines: Vec<DateTime<Utc>>,
}

/// Padded y-axis bounds for a price range: `[min * 0.9, max * 1.1]`.
#[must_use]
pub fn padded_bounds(min: Decimal, max: Decimal) -> (Decimal, Decimal) {
    (min * Decimal::new(9, 1), max * Decimal::new(11, 1))
}

/// Evenly spaced levels from `lo` to `hi`, both included.
#[must_use]
pub fn gridlines(lo: Decimal, hi: Decimal, count: usize) -> Vec<Decimal> {
    if count < 2 || lo >= hi {
        return vec![lo];
    }
    let steps = Decimal::from(count - 1);
    let step = (hi - lo) / steps;
    (0..count)
        .map(|i| {
            if i == count - 1 {
                hi
            } else {
                lo + step * Decimal::from(i)
            }
        })
        .collect()
}

/// Build the chart for a series.
#[must_use]
pub fn render(series: &PriceSeries) -> Chart {
    let symbol = series.symbol();
    let (lo, hi) = series.close_range();
    let (y_min, y_max) = padded_bounds(lo, hi);
    Chart {
        title: format!("{symbol} Stock Price Trend"),
        x_label: "Date".to_string(),
        y_label: "Price (USD)".to_string(),
        legend: format!("{symbol} Closing Price"),
        points: series
            .points()
            .iter()
            .map(|p| ChartPoint {
                ts: p.ts,
                close: p.close,
            })
            .collect(),
        y_min,
        y_max,
        gridlines: gridlines(y_min, y_max, GRIDLINE_COUNT),
        x_gridlines: series.points().iter().map(|p| p.ts).collect(),
    }
}
