//! tickerlog-mock
//!
//! Deterministic connectors for tests and offline runs.
//!
//! - [`MockConnector`] serves static fixtures for the catalog symbols.
//! - [`DynamicMockConnector`] defers every call to rules set through a controller.
use async_trait::async_trait;
use tickerlog_core::connector::{CalendarProvider, HistoryProvider, TickerConnector};
use tickerlog_core::{Calendar, HistoryRequest, HistoryResponse, Instrument, TickerLogError};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Mock connector for CI-safe runs. Provides deterministic data from static fixtures.
///
/// Special symbols:
/// - `FAIL`: every call fails with a connector error.
/// - `TIMEOUT`: every call stalls briefly before answering not-found.
/// - `EMPTY`: history with no candles and a calendar with no earnings dates.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Static connector name.
    pub const NAME: &'static str = "tickerlog-mock";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> TickerLogError {
        TickerLogError::not_found(what.to_string())
    }

    async fn maybe_fail_or_stall(symbol: &str, capability: &'static str) -> Result<(), TickerLogError> {
        match symbol {
            "FAIL" => Err(TickerLogError::connector(
                Self::NAME,
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Keep short to avoid slowing tests excessively
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl TickerConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_calendar_provider(&self) -> Option<&dyn CalendarProvider> {
        Some(self as &dyn CalendarProvider)
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        instrument: &Instrument,
        _req: HistoryRequest,
    ) -> Result<HistoryResponse, TickerLogError> {
        let s = instrument.symbol_str();
        Self::maybe_fail_or_stall(s, "history").await?;
        fixtures::history::by_symbol(s).ok_or_else(|| Self::not_found(&format!("history for {s}")))
    }
}

#[async_trait]
impl CalendarProvider for MockConnector {
    async fn calendar(&self, instrument: &Instrument) -> Result<Calendar, TickerLogError> {
        let s = instrument.symbol_str();
        Self::maybe_fail_or_stall(s, "calendar").await?;
        fixtures::calendar::by_symbol(s)
            .ok_or_else(|| Self::not_found(&format!("calendar for {s}")))
    }
}
