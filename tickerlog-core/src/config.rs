//! Configuration for fetch requests issued by the tracker.

use std::time::Duration;

use paft::market::requests::history::{Interval, Range};

use crate::TickerLogError;

/// Settings shared by the history and calendar fetchers.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Lookback window for history requests.
    pub range: Range,
    /// Candle interval for history requests.
    pub interval: Interval,
    /// Upper bound for a single provider call.
    pub provider_timeout: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            range: Range::M1,
            interval: Interval::D1,
            provider_timeout: Duration::from_secs(10),
        }
    }
}

/// Parse a provider-style period descriptor (`1mo`, `6mo`, `1y`, `ytd`, ...).
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Errors
/// Returns `InvalidArg` for descriptors outside the supported vocabulary.
pub fn parse_period(s: &str) -> Result<Range, TickerLogError> {
    let range = match s.trim().to_ascii_lowercase().as_str() {
        "1d" => Range::D1,
        "5d" => Range::D5,
        "1mo" => Range::M1,
        "3mo" => Range::M3,
        "6mo" => Range::M6,
        "1y" => Range::Y1,
        "2y" => Range::Y2,
        "5y" => Range::Y5,
        "10y" => Range::Y10,
        "ytd" => Range::Ytd,
        "max" => Range::Max,
        other => {
            return Err(TickerLogError::InvalidArg(format!(
                "unknown period '{other}' (expected one of 1d 5d 1mo 3mo 6mo 1y 2y 5y 10y ytd max)"
            )));
        }
    };
    Ok(range)
}
