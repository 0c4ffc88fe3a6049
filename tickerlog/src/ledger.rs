//! Append-only CSV log of tracked prices.

use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use tickerlog_core::TickerLogError;

/// Log file used when no path is given.
pub const DEFAULT_LOG_FILE: &str = "stock_data_log.csv";

/// Header row written once, when the file is created.
pub const HEADER: [&str; 4] = ["Date", "Symbol", "Current Price", "Next Closing Day"];

/// Run timestamp format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One log row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// When the run happened, in local time.
    pub run_at: DateTime<Local>,
    /// Ticker symbol as entered (upper-cased).
    pub symbol: String,
    /// Last close; blank in the file when absent.
    pub price: Option<Decimal>,
    /// Next earnings date; blank in the file when absent.
    pub next_event: Option<NaiveDate>,
}

impl LogRecord {
    /// Record stamped with the current local time.
    pub fn now(
        symbol: impl Into<String>,
        price: Option<Decimal>,
        next_event: Option<NaiveDate>,
    ) -> Self {
        Self {
            run_at: Local::now(),
            symbol: symbol.into(),
            price,
            next_event,
        }
    }

    /// Field values in header order.
    #[must_use]
    pub fn fields(&self) -> [String; 4] {
        [
            self.run_at.format(TIMESTAMP_FORMAT).to_string(),
            self.symbol.clone(),
            self.price.map(|p| p.to_string()).unwrap_or_default(),
            self.next_event
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        ]
    }
}

/// CSV log at a fixed path.
///
/// Each append opens and closes the file. A missing file is first created with the
/// header in its own cycle. Rows are never rewritten or deduplicated.
#[derive(Debug, Clone)]
pub struct PriceLog {
    path: PathBuf,
}

impl Default for PriceLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl PriceLog {
    /// Log backed by `path`. Nothing is touched until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File this log writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row, writing the header first if the file does not exist.
    ///
    /// # Errors
    /// Returns `Storage` when the file cannot be created, opened, or written.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickerlog::ledger::append",
            skip(self, record),
            fields(path = %self.path.display(), symbol = %record.symbol),
            err,
        )
    )]
    pub fn append(&self, record: &LogRecord) -> Result<(), TickerLogError> {
        if let Some(file) = self.create_if_absent()? {
            self.write_row(file, &HEADER)?;
            #[cfg(feature = "tracing")]
            tracing::debug!(path = %self.path.display(), "created log file");
        }

        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| self.storage_err(e))?;
        self.write_row(file, &record.fields())
    }

    fn create_if_absent(&self) -> Result<Option<File>, TickerLogError> {
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(f) => Ok(Some(f)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(None),
            Err(e) => Err(self.storage_err(e)),
        }
    }

    fn write_row<I, T>(&self, file: File, row: I) -> Result<(), TickerLogError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let mut w = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        w.write_record(row).map_err(|e| self.storage_err(e))?;
        w.flush().map_err(|e| self.storage_err(e))
    }

    fn storage_err(&self, e: impl std::fmt::Display) -> TickerLogError {
        TickerLogError::storage(&self.path, e)
    }
}
