use async_trait::async_trait;

use crate::TickerLogError;
use paft::domain::Instrument;
use paft::fundamentals::statements::Calendar;
use paft::market::requests::history::HistoryRequest;
use paft::market::responses::history::HistoryResponse;

/// Focused role trait for connectors that provide OHLCV history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch OHLCV history for the given instrument and request.
    async fn history(
        &self,
        instrument: &Instrument,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, TickerLogError>;
}

/// Focused role trait for connectors that provide corporate event calendars.
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Fetch the corporate calendar (earnings and dividend dates) for the given instrument.
    async fn calendar(&self, instrument: &Instrument) -> Result<Calendar, TickerLogError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
pub trait TickerConnector: Send + Sync {
    /// A stable identifier used in error messages and logs (e.g. "tickerlog-yfinance").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "Unknown"
    }

    /// Advertise history capability by returning a usable trait object reference when supported.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }

    /// If implemented, returns a trait object for the corporate calendar.
    fn as_calendar_provider(&self) -> Option<&dyn CalendarProvider> {
        None
    }
}
