//! tickerlog-core
//!
//! Core types, traits, and utilities shared across the tickerlog workspace.
//!
//! - `types`: market data structures re-exported from `paft`.
//! - `connector`: the `TickerConnector` trait and its capability provider traits.
//! - `series`: the non-empty closing-price series consumed by charting and logging.
//! - `config`: fetch settings and period parsing.
#![warn(missing_docs)]

/// Fetch settings and period parsing.
pub mod config;
/// Connector capability traits and the primary `TickerConnector` interface.
pub mod connector;
mod error;
/// Closing-price series.
pub mod series;
pub mod types;

pub use config::{TrackerConfig, parse_period};
pub use connector::TickerConnector;
pub use series::{PricePoint, PriceSeries};
pub use types::*;
