use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", home.path());
    cmd
}

#[test]
fn first_run_lists_sample_transactions() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Showing 6 of 6 transactions"));

    assert!(home.path().join("data").join("state.json").exists());
}

#[test]
fn added_transaction_survives_restart() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args([
            "txn", "add", "Train ticket", "450", "--type", "expense", "-c", "Transport", "-d",
            "2025-01-10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created transaction"));

    fintrack(&home)
        .args(["transaction", "list", "-c", "transport"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Train ticket"))
        .stdout(predicate::str::contains("Showing 1 of 1 transactions"));
}

#[test]
fn negative_amount_is_rejected() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["transaction", "add", "Refund", "--", "-20"])
        .assert()
        .failure();
}

#[test]
fn duplicate_budget_category_fails() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["budget", "add", "Food", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Food"));

    fintrack(&home)
        .args(["budget", "add", "Transport", "3000"])
        .assert()
        .success();

    fintrack(&home)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transport"));
}

#[test]
fn loan_calculator_prints_emi() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["calc", "loan", "-p", "1000000", "-r", "8.5", "-y", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8,678.23"));
}

#[test]
fn sip_calculator_prints_future_value() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["calc", "sip", "-a", "5000", "-y", "10", "-r", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1,161,695.38"));
}

#[test]
fn currency_preference_persists() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["currency", "set", "usd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USD"));

    fintrack(&home)
        .args(["currency", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(USD)"));
}

#[test]
fn unknown_conversion_pair_fails() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["currency", "convert", "10", "-f", "USD", "-t", "XYZ"])
        .assert()
        .failure();
}

#[test]
fn json_export_writes_dated_file() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    fintrack(&home)
        .args(["export", "json", "-o"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported data to"));

    let files: Vec<_> = fs::read_dir(out.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("expense-tracker-data-"));
    assert!(files[0].ends_with(".json"));

    let contents = fs::read_to_string(out.path().join(&files[0])).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["transactions"].as_array().unwrap().len(), 6);
    assert_eq!(value["currency"], "INR");
}

#[test]
fn csv_export_to_stdout() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id,date,title,type,category,amount"))
        .stdout(predicate::str::contains("50000.00"));
}

#[test]
fn malformed_state_warns_and_uses_sample_data() {
    let home = TempDir::new().unwrap();
    let data_dir = home.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("state.json"), "{ this is not json").unwrap();

    fintrack(&home)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning"))
        .stdout(predicate::str::contains("Salary"));

    fintrack(&home)
        .args(["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LOAD_FAILED"));
}

#[test]
fn journal_records_actions() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["txn", "add", "Coffee", "120", "-c", "Food"])
        .assert()
        .success();

    fintrack(&home)
        .args(["log", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ADD_TRANSACTION"))
        .stdout(predicate::str::contains("Coffee"));
}

#[test]
fn reset_requires_force() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["budget", "delete", "Food"])
        .assert()
        .success();

    fintrack(&home)
        .args(["reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    fintrack(&home).args(["reset", "--force"]).assert().success();

    fintrack(&home)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn report_summary_shows_totals() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("75,000.00"))
        .stdout(predicate::str::contains("52,800.00"));
}

#[test]
fn config_shows_paths() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("state.json"));

    assert!(home.path().join("config.json").exists());
}

#[test]
fn calculators_reject_terms_past_thirty_years() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["calc", "loan", "-y", "100000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 30"));

    fintrack(&home)
        .args(["calc", "sip", "-y", "31"])
        .assert()
        .failure();
}

#[test]
fn holdings_reports() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["report", "accounts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Net Worth"))
        .stdout(predicate::str::contains("37,000.00"));

    fintrack(&home)
        .args(["report", "investments"])
        .assert()
        .success()
        .stdout(predicate::str::contains("125,000.00"))
        .stdout(predicate::str::contains("12,100.00"));
}
