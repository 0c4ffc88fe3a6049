//! tickerlog-yfinance
//!
//! Public connector that implements `TickerConnector` on top of the `yfinance-rs`
//! client library. Exposes daily price history and the corporate calendar.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `yfinance-rs`.
pub mod adapter;

use std::sync::Arc;

#[cfg(feature = "test-adapters")]
use adapter::CloneArcAdapters;
use adapter::{RealAdapter, YfCalendar, YfHistory};
use async_trait::async_trait;
use tickerlog_core::{
    Calendar, HistoryRequest, HistoryResponse, Instrument, TickerLogError,
    connector::{CalendarProvider, HistoryProvider, TickerConnector},
};

/// Public connector type. Production users construct it with `YfConnector::try_new_default()`.
pub struct YfConnector {
    history: Arc<dyn YfHistory>,
    calendar: Arc<dyn YfCalendar>,
}

impl YfConnector {
    /// Static connector name used in errors and logs.
    pub const NAME: &'static str = "tickerlog-yfinance";

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("no matches")
    }

    fn normalize_error(e: TickerLogError, what: &str) -> TickerLogError {
        match e {
            TickerLogError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    TickerLogError::not_found(what.to_string())
                } else {
                    TickerLogError::connector(Self::NAME, msg)
                }
            }
            TickerLogError::Other(msg) => TickerLogError::connector(Self::NAME, msg),
            other => other,
        }
    }

    /// Build with a fresh `yfinance_rs::YfClient` inside.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn try_new_default() -> Result<Self, TickerLogError> {
        let a = RealAdapter::try_new_default()?;
        Ok(Self::from_adapter(&a))
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            history: adapter.clone_arc_history(),
            calendar: adapter.clone_arc_calendar(),
        }
    }

    #[cfg(not(feature = "test-adapters"))]
    /// Build from a concrete `RealAdapter` by cloning it into shared handles.
    pub fn from_adapter(adapter: &RealAdapter) -> Self {
        let shared = Arc::new(adapter.clone());
        Self {
            history: Arc::clone(&shared) as Arc<dyn YfHistory>,
            calendar: shared,
        }
    }
}

impl TickerConnector for YfConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_calendar_provider(&self) -> Option<&dyn CalendarProvider> {
        Some(self as &dyn CalendarProvider)
    }
}

#[async_trait]
impl HistoryProvider for YfConnector {
    async fn history(
        &self,
        instrument: &Instrument,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, TickerLogError> {
        let yf_req = yfinance_rs::core::services::HistoryRequest {
            range: req.range(),
            period: req.period().map(|(s, e)| (s.timestamp(), e.timestamp())),
            interval: req.interval(),
            include_prepost: req.include_prepost(),
            include_actions: req.include_actions(),
            auto_adjust: req.auto_adjust(),
            keepna: req.keepna(),
        };
        let symbol = instrument.symbol_str();
        self.history
            .fetch_full(symbol, yf_req)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("history for {symbol}")))
    }
}

#[async_trait]
impl CalendarProvider for YfConnector {
    async fn calendar(&self, instrument: &Instrument) -> Result<Calendar, TickerLogError> {
        let symbol = instrument.symbol_str();
        self.calendar
            .calendar(symbol)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("calendar for {symbol}")))
    }
}
