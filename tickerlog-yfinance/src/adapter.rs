#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;

use tickerlog_core::TickerLogError;
use yf::core::HistoryService;
use yfinance_rs as yf;

const CONNECTOR: &str = "tickerlog-yfinance";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// History abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YfHistory: Send + Sync {
    /// Fetch full history for a symbol using a provider-specific request.
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, TickerLogError>;
}

/// Calendar abstraction for earnings and dividend dates.
#[async_trait]
pub trait YfCalendar: Send + Sync {
    /// Fetch the earnings/dividend calendar for `symbol`.
    async fn calendar(&self, symbol: &str) -> Result<yf::fundamentals::Calendar, TickerLogError>;
}

/// Real adapter backed by a single `YfClient` instance.
/// `YfClient` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    client: yf::YfClient,
}

impl RealAdapter {
    /// Build a `YfClient` on a cookie-enabled HTTP client with a browser user agent.
    ///
    /// # Errors
    /// Returns a `Connector` error if the HTTP client or `YfClient` cannot be built.
    pub fn try_new_default() -> Result<Self, TickerLogError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .no_proxy()
            .build()
            .map_err(|e| TickerLogError::connector(CONNECTOR, e.to_string()))?;
        Self::try_with_reqwest_client(http)
    }

    fn try_with_reqwest_client(http: reqwest::Client) -> Result<Self, TickerLogError> {
        let client = yf::YfClient::builder()
            .custom_client(http)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TickerLogError::connector(CONNECTOR, e.to_string()))?;
        Ok(Self { client })
    }
}

fn map_yf_err(e: &yf::YfError, context: &str) -> TickerLogError {
    #[cfg(feature = "tracing")]
    tracing::debug!(error = %e, context, "yfinance call failed");
    match e {
        yf::YfError::NotFound { .. } => TickerLogError::not_found(context.to_string()),
        yf::YfError::RateLimited { .. } => {
            TickerLogError::connector(CONNECTOR, format!("rate limit: {context}"))
        }
        yf::YfError::ServerError { status, .. } => {
            TickerLogError::connector(CONNECTOR, format!("server error {status}: {context}"))
        }
        yf::YfError::Status { status, .. } => {
            TickerLogError::connector(CONNECTOR, format!("status {status}: {context}"))
        }
        other => TickerLogError::connector(CONNECTOR, other.to_string()),
    }
}

#[async_trait]
impl YfHistory for RealAdapter {
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, TickerLogError> {
        // `YfClient` implements `HistoryService`, which we use directly.
        self.client
            .fetch_full_history(symbol, req)
            .await
            .map_err(|e| map_yf_err(&e, &format!("history for {symbol}")))
    }
}

#[async_trait]
impl YfCalendar for RealAdapter {
    async fn calendar(&self, symbol: &str) -> Result<yf::fundamentals::Calendar, TickerLogError> {
        let fb = yf::fundamentals::FundamentalsBuilder::new(&self.client, symbol.to_string());
        fb.calendar()
            .await
            .map_err(|e| map_yf_err(&e, &format!("calendar for {symbol}")))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfHistory {
    /// Build a `YfHistory` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfHistory>
    where
        F: Send
            + Sync
            + 'static
            + Fn(
                String,
                yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, TickerLogError>,
    {
        struct FnHist<F>(F);
        #[async_trait]
        impl<F> YfHistory for FnHist<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(
                    String,
                    yf::core::services::HistoryRequest,
                ) -> Result<yf::HistoryResponse, TickerLogError>,
        {
            async fn fetch_full(
                &self,
                symbol: &str,
                req: yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, TickerLogError> {
                (self.0)(symbol.to_string(), req)
            }
        }
        Arc::new(FnHist(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfCalendar {
    /// Build a `YfCalendar` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfCalendar>
    where
        F: Send
            + Sync
            + 'static
            + Fn(String) -> Result<yf::fundamentals::Calendar, TickerLogError>,
    {
        struct FnCal<F>(F);
        #[async_trait]
        impl<F> YfCalendar for FnCal<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(String) -> Result<yf::fundamentals::Calendar, TickerLogError>,
        {
            async fn calendar(
                &self,
                symbol: &str,
            ) -> Result<yf::fundamentals::Calendar, TickerLogError> {
                (self.0)(symbol.to_string())
            }
        }
        Arc::new(FnCal(f))
    }
}

/// Helper trait to split a concrete adapter into arc trait objects.
///
/// Every method defaults to an adapter that answers `unsupported`, so tests
/// override only the endpoints they exercise.
#[cfg(feature = "test-adapters")]
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn YfHistory>`.
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        <dyn YfHistory>::from_fn(|_, _| Err(TickerLogError::unsupported("history")))
    }
    /// Clone as `Arc<dyn YfCalendar>`.
    fn clone_arc_calendar(&self) -> Arc<dyn YfCalendar> {
        <dyn YfCalendar>::from_fn(|_| Err(TickerLogError::unsupported("calendar")))
    }
}

#[cfg(feature = "test-adapters")]
impl CloneArcAdapters for RealAdapter {
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        Arc::new(self.clone()) as Arc<dyn YfHistory>
    }
    fn clone_arc_calendar(&self) -> Arc<dyn YfCalendar> {
        Arc::new(self.clone()) as Arc<dyn YfCalendar>
    }
}
