use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("wbfx").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("wbfx"));
}

#[test]
fn currencies_lists_mapped_countries_only() {
    let mut cmd = Command::cargo_bin("wbfx").unwrap();
    cmd.arg("currencies");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("BRA  BRL"))
        .stdout(predicate::str::contains("ATA").not());
}

#[test]
fn year_below_floor_is_rejected_by_parser() {
    let mut cmd = Command::cargo_bin("wbfx").unwrap();
    cmd.args(["get", "--year", "1959", "--no-names"]);
    cmd.assert().failure();
}

#[test]
fn unknown_metric_is_rejected() {
    let mut cmd = Command::cargo_bin("wbfx").unwrap();
    cmd.args(["get", "--metric", "inflation", "--no-names"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown metric"));
}

// Both checks fail before any request is made, so these run offline.
#[test]
fn exchange_before_2000_prints_message() {
    let mut cmd = Command::cargo_bin("wbfx").unwrap();
    cmd.args([
        "get",
        "--country",
        "USA",
        "--metric",
        "exchange-rate",
        "--year",
        "1999",
        "--no-names",
    ]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains(
            "Exchange rate data is not available for this year.",
        ));
}

#[test]
fn exchange_for_antarctica_prints_message_as_json() {
    let mut cmd = Command::cargo_bin("wbfx").unwrap();
    cmd.args([
        "get",
        "--country",
        "ATA",
        "--metric",
        "exchange-rate",
        "--year",
        "2020",
        "--no-names",
        "--json",
    ]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("\"card\": \"failed\""))
        .stdout(predicate::str::contains("No currency found for this country."));
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn fetch_online_population() {
    let mut cmd = Command::cargo_bin("wbfx").unwrap();
    cmd.args([
        "get",
        "--country",
        "BRA",
        "--metric",
        "population",
        "--year",
        "2020",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("inhabitants"));
}
