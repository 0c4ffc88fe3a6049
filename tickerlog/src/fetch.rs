use chrono::NaiveDate;
use rust_decimal::Decimal;
use tickerlog_core::{HistoryRequest, PriceSeries, TickerLogError};

use crate::Tracker;
use crate::core::instrument_for;

/// Everything fetched for one symbol in one run.
///
/// Both outcomes keep their failure reason so callers can report it.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Normalized ticker symbol.
    pub symbol: String,
    /// Closing-price series, or why it could not be fetched.
    pub series: Result<PriceSeries, TickerLogError>,
    /// Next scheduled earnings date, or why it is unavailable.
    pub next_earnings: Result<NaiveDate, TickerLogError>,
}

impl Snapshot {
    /// Last closing price when the series was fetched.
    #[must_use]
    pub fn current_price(&self) -> Option<Decimal> {
        self.series.as_ref().ok().map(PriceSeries::last_close)
    }

    /// Next earnings date when available.
    #[must_use]
    pub fn next_earnings_date(&self) -> Option<NaiveDate> {
        self.next_earnings.as_ref().ok().copied()
    }
}

impl Tracker {
    /// Fetch the closing-price series for `symbol` over the configured range.
    ///
    /// Exactly one provider call is made. Provider failures, timeouts, and an empty
    /// candle list all come back as `Err`; nothing is retried.
    ///
    /// # Errors
    /// - `InvalidArg` for a blank or malformed symbol.
    /// - `Unsupported` when the connector has no history capability.
    /// - `ProviderTimeout` when the call exceeds the configured timeout.
    /// - `EmptySeries` when the provider answered with no candles.
    /// - Any provider error (`NotFound`, `Connector`, ...).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickerlog::fetch::history",
            skip(self),
            fields(connector = self.connector.name()),
            err,
        )
    )]
    pub async fn fetch_history(&self, symbol: &str) -> Result<PriceSeries, TickerLogError> {
        let inst = instrument_for(symbol)?;
        let provider = self
            .connector
            .as_history_provider()
            .ok_or_else(|| TickerLogError::unsupported("history"))?;
        let req = HistoryRequest::try_from_range(self.cfg.range, self.cfg.interval)
            .map_err(|e| TickerLogError::InvalidArg(e.to_string()))?;

        let resp = Self::provider_call_with_timeout(
            self.connector.name(),
            "history",
            self.cfg.provider_timeout,
            provider.history(&inst, req),
        )
        .await?;

        PriceSeries::from_history(inst.symbol_str(), &resp)
    }

    /// Fetch the next scheduled earnings date for `symbol`.
    ///
    /// This is the first entry of the provider's earnings-date list, as a UTC calendar date.
    ///
    /// # Errors
    /// Same classes as [`Tracker::fetch_history`]; a calendar with no earnings dates
    /// is `NotFound`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickerlog::fetch::next_earnings",
            skip(self),
            fields(connector = self.connector.name()),
            err,
        )
    )]
    pub async fn fetch_next_earnings(&self, symbol: &str) -> Result<NaiveDate, TickerLogError> {
        let inst = instrument_for(symbol)?;
        let provider = self
            .connector
            .as_calendar_provider()
            .ok_or_else(|| TickerLogError::unsupported("calendar"))?;

        let calendar = Self::provider_call_with_timeout(
            self.connector.name(),
            "calendar",
            self.cfg.provider_timeout,
            provider.calendar(&inst),
        )
        .await?;

        calendar
            .earnings_dates
            .first()
            .map(chrono::DateTime::date_naive)
            .ok_or_else(|| {
                TickerLogError::not_found(format!("earnings date for {}", inst.symbol_str()))
            })
    }

    /// Fetch history, then the next earnings date, one after the other.
    pub async fn collect(&self, symbol: &str) -> Snapshot {
        let series = self.fetch_history(symbol).await;
        let next_earnings = self.fetch_next_earnings(symbol).await;
        Snapshot {
            symbol: symbol.trim().to_ascii_uppercase(),
            series,
            next_earnings,
        }
    }
}
