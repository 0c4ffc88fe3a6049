use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tickerlog_core::TickerLogError;

use super::Chart;

/// Displays or stores a rendered chart.
pub trait ChartPresenter {
    /// Presenter label used in diagnostics.
    fn name(&self) -> &'static str;

    /// Present `chart`. Interactive presenters block until the viewer is closed.
    ///
    /// # Errors
    /// Returns `Chart` or `Storage` when the chart cannot be shown or written.
    fn present(&self, chart: &Chart) -> Result<(), TickerLogError>;
}

/// Writes the chart as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonPresenter {
    path: PathBuf,
}

impl JsonPresenter {
    /// Presenter that overwrites `path` on each call.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ChartPresenter for JsonPresenter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn present(&self, chart: &Chart) -> Result<(), TickerLogError> {
        let file = File::create(&self.path).map_err(|e| TickerLogError::storage(&self.path, e))?;
        let mut w = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut w, chart)
            .map_err(|e| TickerLogError::storage(&self.path, e))?;
        w.flush().map_err(|e| TickerLogError::storage(&self.path, e))
    }
}

/// Discards every chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl ChartPresenter for NullPresenter {
    fn name(&self) -> &'static str {
        "none"
    }

    fn present(&self, _chart: &Chart) -> Result<(), TickerLogError> {
        Ok(())
    }
}
