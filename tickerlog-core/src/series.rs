//! Closing-price series extracted from provider history.

use chrono::{DateTime, Utc};
use paft::market::responses::history::HistoryResponse;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::TickerLogError;

/// One closing price at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Candle timestamp (UTC).
    pub ts: DateTime<Utc>,
    /// Closing price in the series currency.
    pub close: Decimal,
}

/// Non-empty closing-price series in ascending timestamp order.
///
/// Construction is the only place emptiness is checked: a `PriceSeries` value
/// always has a last point, so reading the current price never faults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceSeries {
    symbol: String,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from raw points, sorting them by timestamp.
    ///
    /// # Errors
    /// Returns `EmptySeries` when `points` is empty.
    pub fn new(symbol: impl Into<String>, mut points: Vec<PricePoint>) -> Result<Self, TickerLogError> {
        let symbol = symbol.into();
        if points.is_empty() {
            return Err(TickerLogError::empty_series(symbol));
        }
        points.sort_by_key(|p| p.ts);
        Ok(Self { symbol, points })
    }

    /// Build a series from the close column of a provider history response.
    ///
    /// # Errors
    /// Returns `EmptySeries` when the response holds no candles.
    pub fn from_history(
        symbol: impl Into<String>,
        resp: &HistoryResponse,
    ) -> Result<Self, TickerLogError> {
        let points = resp
            .candles
            .iter()
            .map(|c| PricePoint {
                ts: c.ts,
                close: c.close.amount(),
            })
            .collect();
        Self::new(symbol, points)
    }

    /// Symbol this series belongs to.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// All points in ascending timestamp order.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recent point.
    #[must_use]
    pub fn last(&self) -> &PricePoint {
        // non-empty by construction
        &self.points[self.points.len() - 1]
    }

    /// Closing price of the most recent point.
    #[must_use]
    pub fn last_close(&self) -> Decimal {
        self.last().close
    }

    /// Smallest and largest closing price, in that order.
    #[must_use]
    pub fn close_range(&self) -> (Decimal, Decimal) {
        let first = self.points[0].close;
        self.points
            .iter()
            .skip(1)
            .fold((first, first), |(lo, hi), p| (lo.min(p.close), hi.max(p.close)))
    }
}
