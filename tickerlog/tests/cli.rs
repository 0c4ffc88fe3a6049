use assert_cmd::Command;
use predicates::prelude::*;

fn tickerlog() -> Command {
    let mut cmd = Command::cargo_bin("tickerlog").unwrap();
    cmd.env_remove("TICKERLOG_USE_MOCK").env("RUST_LOG", "off");
    cmd
}

#[test]
fn symbol_flag_runs_offline_and_writes_log() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("log.csv");

    tickerlog()
        .args(["--mock", "--chart", "none", "--symbol", "aapl", "--log-file"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Common Stock Symbols and Company Names:\nAAPL: Apple Inc.\n",
        ))
        .stdout(predicate::str::contains("The current price of AAPL is $169.58"))
        .stdout(predicate::str::contains(
            "The next earnings date for AAPL is 2024-05-02",
        ))
        .stdout(predicate::str::ends_with("Data has been logged to the CSV file.\n"));

    let csv = std::fs::read_to_string(&log).unwrap();
    assert!(csv.starts_with("Date,Symbol,Current Price,Next Closing Day\n"));
    assert_eq!(csv.lines().count(), 2);
}

#[test]
fn prompts_on_stdin_when_no_symbol_given() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("log.csv");

    tickerlog()
        .env("TICKERLOG_USE_MOCK", "1")
        .args(["--chart", "none", "--log-file"])
        .arg(&log)
        .write_stdin("tsla\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Enter a stock symbol from the list above: ",
        ))
        .stdout(predicate::str::contains("The current price of TSLA is $168.38"));
}

#[test]
fn unknown_symbol_reports_error_and_still_logs() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("log.csv");

    tickerlog()
        .args(["--mock", "--chart", "none", "--symbol", "ZZZZ", "--log-file"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("Error fetching data for ZZZZ"))
        .stdout(predicate::str::contains(
            "Next earnings date information not available for ZZZZ",
        ));

    let csv = std::fs::read_to_string(&log).unwrap();
    assert!(csv.lines().nth(1).unwrap().ends_with(",ZZZZ,,"));
}

#[test]
fn json_chart_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let chart = dir.path().join("chart.json");

    tickerlog()
        .args(["--mock", "--symbol", "MSFT", "--chart", "json", "--log-file"])
        .arg(dir.path().join("log.csv"))
        .arg("--chart-path")
        .arg(&chart)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&chart).unwrap()).unwrap();
    assert_eq!(json["title"], "MSFT Stock Price Trend");
    assert_eq!(json["points"].as_array().unwrap().len(), 3);
}

#[test]
fn unwritable_log_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();

    tickerlog()
        .args(["--mock", "--chart", "none", "--symbol", "AAPL", "--log-file"])
        .arg(dir.path().join("missing").join("log.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("storage error"));
}

#[test]
fn bad_period_is_rejected() {
    tickerlog()
        .args(["--mock", "--chart", "none", "--symbol", "AAPL", "--period", "3w"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown period '3w'"));
}
