use std::sync::Arc;

use tickerlog_core::{
    AssetKind, Instrument, Range, TickerConnector, TickerLogError, TrackerConfig,
};

/// Orchestrator that issues history and calendar requests against one connector.
pub struct Tracker {
    pub(crate) connector: Arc<dyn TickerConnector>,
    pub(crate) cfg: TrackerConfig,
}

/// Builder for constructing a `Tracker` with custom configuration.
pub struct TrackerBuilder {
    connector: Option<Arc<dyn TickerConnector>>,
    cfg: TrackerConfig,
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackerBuilder {
    /// Create a new builder with defaults: one month of daily candles, 10s provider timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cfg: TrackerConfig::default(),
        }
    }

    /// Register the provider connector. A later call replaces an earlier one.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn TickerConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Lookback window for history requests.
    #[must_use]
    pub const fn range(mut self, range: Range) -> Self {
        self.cfg.range = range;
        self
    }

    /// Upper bound for a single provider call.
    ///
    /// A call that exceeds it fails with `ProviderTimeout`; it is not retried.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Build the tracker.
    ///
    /// # Errors
    /// Returns `InvalidArg` when no connector was registered.
    pub fn build(self) -> Result<Tracker, TickerLogError> {
        let connector = self
            .connector
            .ok_or_else(|| TickerLogError::InvalidArg("no connector registered".into()))?;
        Ok(Tracker {
            connector,
            cfg: self.cfg,
        })
    }
}

impl Tracker {
    /// Start building a new `Tracker`.
    #[must_use]
    pub fn builder() -> TrackerBuilder {
        TrackerBuilder::new()
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickerlog::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> Result<T, TickerLogError>
    where
        Fut: core::future::Future<Output = Result<T, TickerLogError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(TickerLogError::provider_timeout(connector_name, capability)))
    }
}

/// Trim and upper-case a user-entered ticker symbol.
///
/// # Errors
/// Returns `InvalidArg` for an empty or blank symbol.
pub fn normalize_symbol(raw: &str) -> Result<String, TickerLogError> {
    let s = raw.trim().to_ascii_uppercase();
    if s.is_empty() {
        return Err(TickerLogError::InvalidArg("empty ticker symbol".into()));
    }
    Ok(s)
}

pub(crate) fn instrument_for(symbol: &str) -> Result<Instrument, TickerLogError> {
    let s = normalize_symbol(symbol)?;
    Instrument::from_symbol(&s, AssetKind::Equity)
        .map_err(|e| TickerLogError::InvalidArg(format!("invalid symbol '{s}': {e}")))
}
