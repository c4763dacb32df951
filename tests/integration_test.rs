use std::path::Path;
use std::process::Command;

use anyhow::{Result, anyhow};
use serde_json::Value;

const SOURCE_ADDRESS: &str = "GABQGAYDAMBQGAYDAMBQGAYDAMBQGAYDAMBQGAYDAMBQGAYDAMBQHGPC";
const DESTINATION_ADDRESS: &str = "GACAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAJJHP";

fn run_export(extra_args: &[&str]) -> Result<Vec<Value>> {
    let binary_path = env!("CARGO_BIN_EXE_ledger-etl");
    let sample_path = Path::new("samples").join("sample.json");

    let output = Command::new(binary_path)
        .arg(sample_path)
        .args(extra_args)
        .output()?;

    if !output.status.success() {
        return Err(anyhow!("export exited with {}", output.status));
    }

    let stdout = String::from_utf8(output.stdout)?;

    stdout
        .lines()
        .map(|line| serde_json::from_str(line).map_err(Into::into))
        .collect()
}

#[test]
fn test_cli_exports_one_record_per_operation() -> Result<()> {
    let records = run_export(&["100", "101"])?;

    assert_eq!(records.len(), 4);

    let first = &records[0];

    assert_eq!(first["type"], 0);
    assert_eq!(first["application_order"], 1);
    assert_eq!(first["source_account"], SOURCE_ADDRESS);
    assert_eq!(first["details"]["funder"], SOURCE_ADDRESS);
    assert_eq!(first["details"]["account"], DESTINATION_ADDRESS);
    assert_eq!(first["details"]["starting_balance"], 2.5);

    let payment = &records[1];

    assert_eq!(payment["type"], 1);
    assert_eq!(payment["details"]["amount"], 35.0);
    assert_eq!(payment["details"]["asset_type"], "native");
    assert!(payment["details"].get("asset_code").is_none());

    let bump = &records[2];

    assert_eq!(bump["type"], 11);
    assert_eq!(bump["details"]["bump_to"], "100");

    let inflation = &records[3];

    assert_eq!(inflation["type"], 9);
    assert_eq!(inflation["source_account"], DESTINATION_ADDRESS);
    assert_eq!(inflation["details"], serde_json::json!({}));

    Ok(())
}

#[test]
fn test_cli_limit_bounds_the_exported_transactions() -> Result<()> {
    let records = run_export(&["100", "101", "1"])?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["type"], 0);
    assert_eq!(records[1]["type"], 1);

    Ok(())
}

#[test]
fn test_cli_fails_on_an_unavailable_range() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_ledger-etl");
    let sample_path = Path::new("samples").join("sample.json");

    let output = Command::new(binary_path)
        .arg(sample_path)
        .args(["100", "102"])
        .output()?;

    assert!(!output.status.success());

    Ok(())
}
