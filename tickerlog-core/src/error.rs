use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the tickerlog workspace.
///
/// Every fetch, render, and log failure is reported through this enum so callers can
/// branch on the outcome without losing the underlying reason.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TickerLogError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "history").
        capability: String,
    },

    /// Issues with the returned or expected data (missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "history for AAPL".
        what: String,
    },

    /// A provider answered but the price series held no trading data.
    #[error("empty price series for {symbol}")]
    EmptySeries {
        /// Symbol whose series came back empty.
        symbol: String,
    },

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label (e.g. "history", "calendar").
        capability: String,
    },

    /// Reading or writing a local file failed.
    #[error("storage error at {path}: {msg}")]
    Storage {
        /// Path of the file involved.
        path: String,
        /// Underlying I/O or encoding message.
        msg: String,
    },

    /// Presenting a rendered chart failed.
    #[error("chart error: {0}")]
    Chart(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

/// Coarse classification of a failure, as surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// The symbol or its data does not exist at the provider.
    NotFound,
    /// The provider could not be reached or answered with a transport-level error.
    Network,
    /// Anything else.
    Other,
}

impl TickerLogError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `EmptySeries` error for a symbol.
    pub fn empty_series(symbol: impl Into<String>) -> Self {
        Self::EmptySeries {
            symbol: symbol.into(),
        }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `Storage` error from a path and any displayable cause.
    pub fn storage(path: impl AsRef<std::path::Path>, msg: impl std::fmt::Display) -> Self {
        Self::Storage {
            path: path.as_ref().display().to_string(),
            msg: msg.to_string(),
        }
    }

    /// Coarse failure classification.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::NotFound { .. } | Self::EmptySeries { .. } => FailureKind::NotFound,
            Self::Connector { .. } | Self::ProviderTimeout { .. } => FailureKind::Network,
            _ => FailureKind::Other,
        }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Non-actionable errors are those indicating capability absence or a benign
    /// not-found condition.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(
            self,
            Self::Unsupported { .. } | Self::NotFound { .. } | Self::EmptySeries { .. }
        )
    }
}

impl From<paft::Error> for TickerLogError {
    fn from(err: paft::Error) -> Self {
        use paft::Error as E;
        match err {
            // Money runtime issues indicate a data/operation problem at runtime
            E::Money(_) => Self::Data(err.to_string()),
            E::Core(_) | E::Domain(_) | E::Market(_) | E::MoneyParse(_) | E::Canonical(_) => {
                Self::InvalidArg(err.to_string())
            }
        }
    }
}

impl From<paft::market::MarketError> for TickerLogError {
    fn from(e: paft::market::MarketError) -> Self {
        Self::InvalidArg(e.to_string())
    }
}

impl From<paft::domain::DomainError> for TickerLogError {
    fn from(e: paft::domain::DomainError) -> Self {
        Self::InvalidArg(e.to_string())
    }
}

impl From<paft::money::MoneyError> for TickerLogError {
    fn from(e: paft::money::MoneyError) -> Self {
        Self::Data(e.to_string())
    }
}
