//! One interactive run: prompt, fetch, chart, log, summarize.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use rust_decimal::RoundingStrategy;
use tickerlog_core::{PriceSeries, TickerLogError};

use crate::Tracker;
use crate::chart::{self, ChartPresenter};
use crate::core::normalize_symbol;
use crate::fetch::Snapshot;
use crate::ledger::{LogRecord, PriceLog};

/// Prompt shown before reading the symbol.
pub const PROMPT: &str = "Enter a stock symbol from the list above: ";

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Normalized symbol.
    pub symbol: String,
    /// History outcome.
    pub series: Result<PriceSeries, TickerLogError>,
    /// Earnings-date outcome.
    pub next_earnings: Result<NaiveDate, TickerLogError>,
    /// Row appended to the log.
    pub record: LogRecord,
}

fn output_err(e: std::io::Error) -> TickerLogError {
    TickerLogError::Other(format!("writing output: {e}"))
}

/// Print the prompt and read one symbol from `input`.
///
/// # Errors
/// Returns `InvalidArg` when the line is blank or input is closed.
pub fn prompt_symbol<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<String, TickerLogError> {
    write!(out, "{PROMPT}").map_err(output_err)?;
    out.flush().map_err(output_err)?;
    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .map_err(|e| TickerLogError::InvalidArg(format!("reading symbol: {e}")))?;
    if n == 0 {
        return Err(TickerLogError::InvalidArg("no symbol entered".into()));
    }
    normalize_symbol(&line)
}

/// Fetch everything for `symbol`, then chart, log and summarize it.
///
/// # Errors
/// See [`finish`]; also `InvalidArg` for a blank symbol.
pub async fn run<W: Write>(
    tracker: &Tracker,
    symbol: &str,
    presenter: &dyn ChartPresenter,
    log: &PriceLog,
    out: &mut W,
) -> Result<RunReport, TickerLogError> {
    let symbol = normalize_symbol(symbol)?;
    let snapshot = tracker.collect(&symbol).await;
    finish(snapshot, presenter, log, out)
}

/// Present the chart, append the log row and print the summary.
///
/// Fetch failures are reported on `out` and leave blank log fields. A chart that
/// cannot be presented is reported and skipped.
///
/// # Errors
/// Returns `Storage` when the log row cannot be written, or `Other` when `out`
/// rejects a write.
pub fn finish<W: Write>(
    snapshot: Snapshot,
    presenter: &dyn ChartPresenter,
    log: &PriceLog,
    out: &mut W,
) -> Result<RunReport, TickerLogError> {
    let sym = snapshot.symbol.as_str();

    match &snapshot.series {
        Ok(series) => {
            let chart = chart::render(series);
            if let Err(e) = presenter.present(&chart) {
                #[cfg(feature = "tracing")]
                tracing::warn!(presenter = presenter.name(), error = %e, "chart not presented");
                writeln!(out, "Could not show chart for {sym}: {e}").map_err(output_err)?;
            }
        }
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(symbol = sym, kind = ?e.kind(), error = %e, "history fetch failed");
            writeln!(out, "Error fetching data for {sym} ({e})").map_err(output_err)?;
        }
    }

    let price = snapshot.current_price();
    let next = snapshot.next_earnings_date();
    let record = LogRecord::now(sym, price, next);
    log.append(&record)?;

    if let Some(p) = price {
        // Decimal's precision flag truncates
        let p = p.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        writeln!(out, "The current price of {sym} is ${p:.2}").map_err(output_err)?;
    }
    match next {
        Some(d) => writeln!(out, "The next earnings date for {sym} is {}", d.format("%Y-%m-%d")),
        None => writeln!(out, "Next earnings date information not available for {sym}"),
    }
    .map_err(output_err)?;
    writeln!(out, "Data has been logged to the CSV file.").map_err(output_err)?;

    Ok(RunReport {
        symbol: snapshot.symbol,
        series: snapshot.series,
        next_earnings: snapshot.next_earnings,
        record,
    })
}
