use std::path::Path;
use std::process::{Command, Output};

use anyhow::{anyhow, Result};
use serde_json::Value;

fn run_engine(args: &[&str]) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_payment-metrics-engine");

    Ok(Command::new(binary_path).args(args).output()?)
}

fn snapshot_from(output: &Output) -> Result<Value> {
    assert!(output.status.success(), "engine failed: {}", String::from_utf8_lossy(&output.stderr));

    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn test_cli_computes_snapshot_from_csv_input() -> Result<()> {
    let sample_path = Path::new("samples").join("transactions.csv");
    let sample = sample_path.to_str().ok_or_else(|| anyhow!("sample path is not utf-8"))?;

    let snapshot = snapshot_from(&run_engine(&["--input", sample, "--date", "2026-01-25"])?)?;

    assert_eq!(snapshot["today"]["successCount"], 2);
    assert_eq!(snapshot["today"]["successVolume"], "130.00");
    assert_eq!(snapshot["today"]["newCustomers"], 1);
    assert_eq!(snapshot["today"]["returningCustomers"], 1);
    assert_eq!(snapshot["today"]["averageCustomerVolume"], "65.00");
    assert_eq!(snapshot["yesterday"]["newCustomers"], 1);
    assert_eq!(snapshot["errors"]["count"], 3);
    assert_eq!(snapshot["errors"]["rate"], "60.0");
    assert_eq!(snapshot["errors"]["volume"], "75.50");
    assert_eq!(snapshot["errors"]["breakdown"][0]["reason"], "card_declined");
    assert_eq!(snapshot["errors"]["breakdown"][0]["count"], 2);
    assert_eq!(snapshot["topCustomers"]["today"][0]["customerId"], "cus_beta");
    assert_eq!(snapshot["topSpenders"]["allTime"]["entries"][0]["customerId"], "cus_delta");
    assert_eq!(snapshot["topSpenders"]["allTime"]["entries"][0]["percent"], "42.6");
    assert_eq!(snapshot["topSpenders"]["last30Days"]["grandTotal"], "270.00");

    Ok(())
}

#[test]
fn test_cli_generates_history_when_no_input_is_given() -> Result<()> {
    let snapshot = snapshot_from(&run_engine(&["--date", "2026-01-25", "--lookback-days", "1"])?)?;

    assert_eq!(snapshot["today"]["successCount"], 18);
    assert_eq!(snapshot["today"]["successVolume"], "2429.17");
    assert_eq!(snapshot["errors"]["count"], 4);
    assert_eq!(snapshot["errors"]["breakdown"].as_array().map(Vec::len), Some(5));
    assert_eq!(snapshot["topCustomers"]["today"].as_array().map(Vec::len), Some(3));

    Ok(())
}

#[test]
fn test_cli_honours_top_list_sizes() -> Result<()> {
    let snapshot = snapshot_from(&run_engine(&["--date", "2026-01-25", "--top-customers", "1", "--top-spenders", "2"])?)?;

    assert_eq!(snapshot["topCustomers"]["today"].as_array().map(Vec::len), Some(1));
    assert_eq!(snapshot["topSpenders"]["allTime"]["entries"].as_array().map(Vec::len), Some(2));
    assert_eq!(snapshot["topSpenders"]["last30Days"]["entries"].as_array().map(Vec::len), Some(2));

    Ok(())
}

#[test]
fn test_cli_accepts_cache_settings() -> Result<()> {
    let base = ["--date", "2026-01-25", "--lookback-days", "1"];
    let default_snapshot = snapshot_from(&run_engine(&base)?)?;

    let tuned_args: Vec<&str> = base.iter().copied().chain(["--cache-capacity", "1", "--cache-ttl-secs", "30"]).collect();
    let tuned_snapshot = snapshot_from(&run_engine(&tuned_args)?)?;

    assert_eq!(tuned_snapshot, default_snapshot);

    let output = run_engine(&["--date", "2026-01-25", "--cache-capacity", "-1"])?;

    assert!(!output.status.success());

    Ok(())
}

#[test]
fn test_cli_rejects_negative_configuration() -> Result<()> {
    let output = run_engine(&["--date", "2026-01-25", "--top-spenders", "-1"])?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("top_spenders_count"));

    let output = run_engine(&["--date", "2026-01-25", "--lookback-days", "-5"])?;

    assert!(!output.status.success());

    Ok(())
}

#[test]
fn test_cli_rejects_inconsistent_csv_rows() -> Result<()> {
    let sample_path = Path::new("samples").join("inconsistent.csv");
    let sample = sample_path.to_str().ok_or_else(|| anyhow!("sample path is not utf-8"))?;

    let output = run_engine(&["--input", sample, "--date", "2026-01-25"])?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_cli_writes_customer_history_as_csv() -> Result<()> {
    let sample_path = Path::new("samples").join("transactions.csv");
    let sample = sample_path.to_str().ok_or_else(|| anyhow!("sample path is not utf-8"))?;

    let output = run_engine(&["--input", sample, "--customer", "cus_alpha"])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut lines = stdout.lines();

    assert_eq!(lines.next(), Some("id,customer_id,customer_name,amount,currency,status,failure_reason,created_at"));

    let ids: Vec<_> = lines.map(|line| line.split(',').next().unwrap_or_default()).collect();

    assert_eq!(ids, vec!["t8", "t2", "t1"]);

    Ok(())
}

#[test]
fn test_cli_warns_about_unknown_customer() -> Result<()> {
    let sample_path = Path::new("samples").join("transactions.csv");
    let sample = sample_path.to_str().ok_or_else(|| anyhow!("sample path is not utf-8"))?;

    let output = run_engine(&["--input", sample, "--customer", "cus_nobody", "--log-level", "warn"])?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("Customer [cus_nobody] not found among [4] customers"));

    Ok(())
}
