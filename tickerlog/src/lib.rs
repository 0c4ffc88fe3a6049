//! tickerlog fetches a stock's recent closing prices, charts the trend, looks up the
//! next earnings date, and appends one row per run to a CSV log.
//!
//! Overview
//! - `Tracker` issues history and calendar requests against a single connector that
//!   implements the `tickerlog_core` contracts, with a per-call timeout.
//! - Fetch outcomes are explicit `Result`s; an empty history is an error, never an
//!   out-of-bounds read.
//! - Charting is split into a pure [`chart::render`] and a [`chart::ChartPresenter`]
//!   (native window, JSON file, or nothing).
//! - [`ledger::PriceLog`] appends rows to `stock_data_log.csv`, creating it with a
//!   header on first use.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickerlog::{Tracker, chart::NullPresenter, ledger::PriceLog, session};
//! use tickerlog_yfinance::YfConnector;
//!
//! let tracker = Tracker::builder()
//!     .with_connector(Arc::new(YfConnector::try_new_default()?))
//!     .build()?;
//! let report = session::run(
//!     &tracker,
//!     "aapl",
//!     &NullPresenter,
//!     &PriceLog::default(),
//!     &mut std::io::stdout(),
//! )
//! .await?;
//! println!("{:?}", report.record);
//! ```
#![warn(missing_docs)]

pub mod catalog;
pub mod chart;
pub(crate) mod core;
mod fetch;
pub mod ledger;
pub mod session;

pub use crate::core::{Tracker, TrackerBuilder, normalize_symbol};
pub use fetch::Snapshot;

// Re-export core types for convenience
pub use tickerlog_core::{
    FailureKind, Interval, PricePoint, PriceSeries, Range, TickerConnector, TickerLogError,
    TrackerConfig, parse_period,
};
