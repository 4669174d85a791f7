//! End-to-end tests of the bsprice binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const ATM_CALL: [&str; 10] = [
    "--spot", "100", "--strike", "100", "--expiry", "1", "--rate", "0.05", "--vol", "0.2",
];

fn bsprice() -> Command {
    let mut cmd = Command::cargo_bin("bsprice").unwrap();
    cmd.env_remove("BSPRICE_FORMAT")
        .env_remove("BSPRICE_LOG_LEVEL")
        .env_remove("BSPRICE_GRID_POINTS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_price_table() {
    bsprice()
        .arg("price")
        .args(ATM_CALL)
        .assert()
        .success()
        .stdout(predicate::str::contains("10.450584"));
}

#[test]
fn test_put_price_json() {
    bsprice()
        .args(["price", "--type", "put", "--format", "json"])
        .args(ATM_CALL)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"option_type\": \"put\""))
        .stdout(predicate::str::contains("5.57352"));
}

#[test]
fn test_greeks_csv() {
    bsprice()
        .args(["greeks", "--format", "csv"])
        .args(ATM_CALL)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "option_type,delta,gamma,vega,theta,theta_per_day,rho",
        ));
}

#[test]
fn test_format_from_environment() {
    bsprice()
        .env("BSPRICE_FORMAT", "csv")
        .arg("price")
        .args(ATM_CALL)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("option_type,spot"));
}

#[test]
fn test_payoff_grid_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "grid_points = 5\nformat = \"csv\"").unwrap();

    bsprice()
        .args(["payoff", "--premium", "10", "--config"])
        .arg(file.path())
        .args(ATM_CALL)
        .assert()
        .success()
        .stdout(predicate::eq(
            "underlying,payoff\n50.0,-10.0\n75.0,-10.0\n100.0,-10.0\n125.0,15.0\n150.0,40.0\n",
        ));
}

#[test]
fn test_sweep_volatility() {
    let output = bsprice()
        .args(["sweep", "--field", "vol", "--values", "0.1,0.2,0.3", "--format", "csv"])
        .args(ATM_CALL)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 4);
}

#[test]
fn test_invalid_spot_fails() {
    bsprice()
        .args([
            "price", "--spot", "-100", "--strike", "100", "--expiry", "1", "--rate", "0.05",
            "--vol", "0.2",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid spot price"));
}

#[test]
fn test_expired_greeks_fail() {
    bsprice()
        .args([
            "greeks", "--spot", "110", "--strike", "100", "--expiry", "0", "--rate", "0.05",
            "--vol", "0.2",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("singular"));
}

#[test]
fn test_maturity_before_valuation_fails() {
    bsprice()
        .args([
            "price",
            "--spot",
            "100",
            "--strike",
            "100",
            "--maturity-date",
            "2024-01-01",
            "--valuation-date",
            "2025-01-01",
            "--rate",
            "0.05",
            "--vol",
            "0.2",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_unordered_sweep_values_fail() {
    bsprice()
        .args(["sweep", "--field", "vol", "--values", "0.3,0.1,0.2"])
        .args(ATM_CALL)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range"));
}
