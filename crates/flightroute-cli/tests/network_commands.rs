//! CLI tests for the network inspection commands and manifest loading.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("flightroute-cli");
    cmd.env("RUST_LOG", "error")
        .env_remove("FLIGHTROUTE_NETWORK")
        .arg("--no-color");
    cmd
}

/// Temporary directory holding a manifest file.
struct ManifestFile {
    _dir: TempDir,
    path: std::path::PathBuf,
}

impl ManifestFile {
    fn new(contents: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("network.json");
        fs::write(&path, contents).expect("write manifest");
        Self { _dir: dir, path }
    }
}

const OCEANIA: &str = r#"{
    "cities": ["Perth", "Darwin", "Cairns", "Hobart"],
    "flights": [
        { "from": "Perth", "to": "Darwin", "cost": 300 },
        { "from": "Darwin", "to": "Cairns", "cost": 250 },
        { "from": "Perth", "to": "Cairns", "cost": 700 }
    ]
}"#;

#[test]
fn cities_lists_sample_in_insertion_order() {
    cli()
        .arg("cities")
        .assert()
        .success()
        .stdout("KL\nSingapore\nBangkok\nTokyo\nSydney\n");
}

#[test]
fn network_listing_matches_print_format() {
    cli()
        .arg("network")
        .assert()
        .success()
        .stdout(predicate::str::contains("KL → Bangkok($200), Singapore($150)"))
        .stdout(predicate::str::contains("Sydney → No outgoing flights"))
        .stdout(predicate::str::ends_with("Total cities: 5\n"));
}

#[test]
fn destinations_are_newest_first() {
    cli()
        .args(["destinations", "--from", "Singapore"])
        .assert()
        .success()
        .stdout("Destinations from Singapore: Sydney, Tokyo\n");
}

#[test]
fn destinations_of_sink_city() {
    cli()
        .args(["destinations", "--from", "Sydney"])
        .assert()
        .success()
        .stdout("Sydney has no outgoing flights.\n");
}

#[test]
fn flight_reports_direct_cost() {
    cli()
        .args(["flight", "--from", "KL", "--to", "Bangkok"])
        .assert()
        .success()
        .stdout("Direct flight KL → Bangkok costs $200.\n");

    cli()
        .args(["flight", "--from", "KL", "--to", "Tokyo"])
        .assert()
        .success()
        .stdout("No direct flight from KL to Tokyo.\n");
}

#[test]
fn flight_json_uses_sentinel() {
    let output = cli()
        .args(["--format", "json", "flight", "--from", "KL", "--to", "Tokyo"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(json["direct"], false);
    assert_eq!(json["cost"], -1);
}

#[test]
fn manifest_flag_replaces_sample() {
    let manifest = ManifestFile::new(OCEANIA);
    cli()
        .arg("--network")
        .arg(&manifest.path)
        .args(["route", "--from", "Perth", "--to", "Cairns"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cost $550"));
}

#[test]
fn manifest_env_var_is_honoured() {
    let manifest = ManifestFile::new(OCEANIA);
    cli()
        .env("FLIGHTROUTE_NETWORK", &manifest.path)
        .arg("cities")
        .assert()
        .success()
        .stdout("Perth\nDarwin\nCairns\nHobart\n");
}

#[test]
fn isolated_city_has_no_routes() {
    let manifest = ManifestFile::new(OCEANIA);
    cli()
        .arg("--network")
        .arg(&manifest.path)
        .args(["route", "--from", "Perth", "--to", "Hobart"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No route found between Perth and Hobart."));
}

#[test]
fn missing_manifest_fails() {
    let dir = TempDir::new().expect("create temp dir");
    cli()
        .arg("--network")
        .arg(dir.path().join("absent.json"))
        .arg("cities")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load network manifest"));
}

#[test]
fn negative_cost_manifest_is_rejected() {
    let manifest = ManifestFile::new(
        r#"{ "flights": [{ "from": "A", "to": "B", "cost": -10 }] }"#,
    );
    cli()
        .arg("--network")
        .arg(&manifest.path)
        .arg("cities")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid network manifest"));
}

#[test]
fn unknown_origin_in_destinations() {
    cli()
        .args(["destinations", "--from", "Bangkk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown city 'Bangkk'. Did you mean"));
}
