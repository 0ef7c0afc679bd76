use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/dehradun")
        .canonicalize()
        .expect("fixture dataset present")
}

fn prepare_command() -> Command {
    let mut cmd = cargo_bin_cmd!("relief-cli");
    cmd.env("RUST_LOG", "error")
        .env_remove("RELIEF_DATA_DIR")
        .arg("--data-dir")
        .arg(fixture_dir());
    cmd
}

#[test]
fn route_avoids_affected_areas() {
    let mut cmd = prepare_command();
    cmd.args([
        "route",
        "--from",
        "Patel Nagar Main",
        "--to",
        "Community Hall Shelter",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no route found"));
}

#[test]
fn route_ignoring_hazards_uses_flooded_road() {
    let mut cmd = prepare_command();
    cmd.args([
        "route",
        "--from",
        "Patel Nagar Main",
        "--to",
        "Community Hall Shelter",
        "--ignore-hazards",
    ]);

    cmd.assert().success().stdout(predicate::str::contains(
        "Patel Nagar Main -> Flood Area Rispana -> Community Hall Shelter",
    ));
}

#[test]
fn shelter_skips_warehouse_and_flooded_route() {
    let mut cmd = prepare_command();
    cmd.args(["shelter", "--from", "Patel Nagar Main"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Nearest shelter: School Relief Shelter (N8), 3 hops",
        ))
        .stdout(predicate::str::contains("Central Warehouse").not());
}

#[test]
fn dispatch_reports_shortfall() {
    let mut cmd = prepare_command();
    cmd.args(["dispatch", "--location", "Patel Nagar Main"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Medicine: required 70, supplied 70"))
        .stdout(predicate::str::contains("Shortfall of 320 units"));
}

#[test]
fn dispatch_json_lists_resources_in_priority_order() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "dispatch", "--location", "Patel Nagar Main"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let report: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let order: Vec<&str> = report["resources"]
        .as_array()
        .expect("resources array")
        .iter()
        .filter_map(|r| r["resource"].as_str())
        .collect();
    assert_eq!(order, vec!["Medicine", "Food", "Water"]);
}

#[test]
fn dispatch_without_zone_fails() {
    let mut cmd = prepare_command();
    cmd.args(["dispatch", "--location", "Clock Tower"]);

    cmd.assert().failure().stderr(predicate::str::contains(
        "no disaster zone information found for location Clock Tower",
    ));
}

#[test]
fn respond_runs_every_step() {
    let mut cmd = prepare_command();
    cmd.args(["respond", "--location", "Patel Nagar Main"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Nearest hospital: Doon Hospital (N4)"))
        .stdout(predicate::str::contains("Nearest shelter: School Relief Shelter (N8)"))
        .stdout(predicate::str::contains("Rescue team T2 based at Railway Station (unavailable) assigned"));
}

#[test]
fn hospitals_report_spill_over() {
    let mut cmd = prepare_command();
    cmd.arg("hospitals");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Doon Hospital (N4): load 250 of 250"))
        .stdout(predicate::str::contains(
            "50 units from Flood Area Rispana (N3) at distance: 4 hops",
        ));
}

#[test]
fn unknown_location_error_is_friendly() {
    let mut cmd = prepare_command();
    cmd.args(["shelter", "--from", "Clock Towr"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown location name: Clock Towr"))
        .stderr(predicate::str::contains("Did you mean"));
}

#[test]
fn data_dir_from_environment() {
    let mut cmd = cargo_bin_cmd!("relief-cli");
    cmd.env("RUST_LOG", "error")
        .env("RELIEF_DATA_DIR", fixture_dir())
        .args(["shelter", "--from", "Clock Tower"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Nearest shelter"));
}

#[test]
fn missing_dataset_reports_path() {
    let temp = tempdir().expect("create temp dir");
    let mut cmd = cargo_bin_cmd!("relief-cli");
    cmd.env("RUST_LOG", "error")
        .arg("--data-dir")
        .arg(temp.path())
        .args(["shelter", "--from", "Clock Tower"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("dataset file not found"));
}
