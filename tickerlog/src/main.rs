use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tickerlog::chart::{ChartPresenter, JsonPresenter, NullPresenter};
use tickerlog::ledger::{DEFAULT_LOG_FILE, PriceLog};
use tickerlog::{TickerConnector, Tracker, catalog, normalize_symbol, parse_period, session};
use tickerlog_mock::MockConnector;
use tickerlog_yfinance::YfConnector;
use tracing_subscriber::EnvFilter;

/// Environment switch for the offline fixture connector.
const MOCK_ENV: &str = "TICKERLOG_USE_MOCK";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ChartMode {
    /// Maximized native window; blocks until closed.
    Window,
    /// Write the chart description as JSON to --chart-path.
    Json,
    /// Skip the chart.
    None,
}

#[derive(Parser, Debug)]
#[command(
    name = "tickerlog",
    version,
    about = "Chart a stock's recent closing prices and log them to CSV"
)]
struct Cli {
    /// Ticker symbol; prompts on stdin when omitted.
    #[arg(short, long)]
    symbol: Option<String>,

    /// History period: 1d 5d 1mo 3mo 6mo 1y 2y 5y 10y ytd max.
    #[arg(short, long, default_value = "1mo")]
    period: String,

    /// CSV log file to append to.
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// How to present the chart.
    #[arg(long, value_enum, default_value_t = ChartMode::Window)]
    chart: ChartMode,

    /// Output file for --chart json.
    #[arg(long, default_value = "price_chart.json")]
    chart_path: PathBuf,

    /// Timeout for each provider call, in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Use built-in fixture data instead of the live provider.
    #[arg(long)]
    mock: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn connector(force_mock: bool) -> anyhow::Result<Arc<dyn TickerConnector>> {
    if force_mock || std::env::var_os(MOCK_ENV).is_some() {
        #[cfg(feature = "tracing")]
        tracing::info!("using fixture connector");
        return Ok(Arc::new(MockConnector::new()));
    }
    let yf = YfConnector::try_new_default().context("building Yahoo Finance connector")?;
    Ok(Arc::new(yf))
}

fn presenter(mode: ChartMode, path: PathBuf) -> Box<dyn ChartPresenter> {
    match mode {
        #[cfg(feature = "window")]
        ChartMode::Window => Box::new(tickerlog::chart::WindowPresenter),
        #[cfg(not(feature = "window"))]
        ChartMode::Window => {
            #[cfg(feature = "tracing")]
            tracing::warn!("built without the window feature; chart skipped");
            Box::new(NullPresenter)
        }
        ChartMode::Json => Box::new(JsonPresenter::new(path)),
        ChartMode::None => Box::new(NullPresenter),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let range = parse_period(&cli.period)?;
    let tracker = Tracker::builder()
        .with_connector(connector(cli.mock)?)
        .range(range)
        .provider_timeout(Duration::from_secs(cli.timeout_secs))
        .build()?;
    let presenter = presenter(cli.chart, cli.chart_path);
    let log = PriceLog::new(cli.log_file);

    let mut out = io::stdout().lock();
    catalog::write_catalog(&mut out)?;
    let symbol = match cli.symbol {
        Some(s) => normalize_symbol(&s)?,
        None => session::prompt_symbol(&mut io::stdin().lock(), &mut out)?,
    };

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    let snapshot = rt.block_on(tracker.collect(&symbol));

    // presented outside the runtime: the window presenter blocks and needs the main thread
    session::finish(snapshot, presenter.as_ref(), &log, &mut out)?;
    out.flush()?;
    Ok(())
}
