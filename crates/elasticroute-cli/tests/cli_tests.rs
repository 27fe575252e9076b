use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const VALID_PLAN: &str = r#"{
    "id": "TestPlan_1234567890",
    "depots": [{"name": "Main Warehouse", "address": "61 Kaki Bukit Ave 1 #04-34, Shun Li Ind Park Singapore 417943"}],
    "vehicles": [{"name": "Van 1"}],
    "stops": [
        {"name": "Customer 1", "address": "80 Marine Parade Rd, #01-08, Singapore 449269"},
        {"name": "Customer 2", "address": "2 Changi Business Park Ave 1, Singapore 486015"}
    ],
    "general_settings": {"avail_from": 900, "avail_till": 1700}
}"#;

/// Helper function to write a plan file into a fresh temporary directory
fn write_plan(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("plan.json");
    std::fs::write(&path, contents).expect("Failed to write plan file");
    (temp_dir, path)
}

/// Helper function to create a Command with --no-color flag for testing
fn er_cmd() -> Command {
    let mut cmd = Command::cargo_bin("er").expect("Failed to find er binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_validate_success() {
    let (_temp_dir, path) = write_plan(VALID_PLAN);

    er_cmd()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Plan TestPlan_1234567890 is valid (2 stops, 1 vehicles, 1 depots)",
        ));
}

#[test]
fn test_cli_validate_too_few_stops() {
    let (_temp_dir, path) = write_plan(
        r#"{
            "id": "TestPlan_1",
            "depots": [{"name": "Main Warehouse", "address": "8 Somapah Road"}],
            "vehicles": [{"name": "Van 1"}],
            "stops": [{"name": "Customer 1", "address": "15 Simei Street 4"}]
        }"#,
    );

    er_cmd()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan TestPlan_1 is invalid"))
        .stderr(predicate::str::contains("You must have at least two stops"));
}

#[test]
fn test_cli_validate_rejects_bad_field() {
    let (_temp_dir, path) = write_plan(
        r#"{"id": "TestPlan_1", "stops": [{"name": "Customer 1", "weight_load": -3}]}"#,
    );

    er_cmd()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Stop WeightLoad cannot be negative"));
}

#[test]
fn test_cli_validate_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("absent.json");

    er_cmd()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read plan file"));
}

#[test]
fn test_cli_preview_shows_defaults() {
    let (_temp_dir, path) = write_plan(VALID_PLAN);

    er_cmd()
        .args(["preview", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "POST plan/TestPlan_1234567890?c=sync",
        ))
        .stdout(predicate::str::contains(r#""depot": "Main Warehouse""#))
        .stdout(predicate::str::contains(r#""from": 900"#))
        .stdout(predicate::str::contains(r#""avail_till": 1700"#));
}

#[test]
fn test_cli_preview_connection_override() {
    let (_temp_dir, path) = write_plan(VALID_PLAN);

    er_cmd()
        .args(["preview", path.to_str().unwrap(), "--connection", "poll"])
        .assert()
        .success()
        .stdout(predicate::str::contains("POST plan/TestPlan_1234567890\n"));

    er_cmd()
        .args(["preview", path.to_str().unwrap(), "--connection", "webhook"])
        .assert()
        .success()
        .stdout(predicate::str::contains("?w=true"));
}

#[test]
fn test_cli_preview_invalid_plan() {
    let (_temp_dir, path) = write_plan(r#"{"id": "", "stops": []}"#);

    er_cmd()
        .args(["preview", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "You need to create an id for this plan!",
        ));
}

#[test]
fn test_cli_solve_without_api_key() {
    let (temp_dir, path) = write_plan(VALID_PLAN);
    let config_path = temp_dir.path().join("config.json");
    std::fs::write(&config_path, r#"{"base_url": "http://127.0.0.1:9"}"#).unwrap();

    er_cmd()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "solve",
            path.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No API key configured"));
}

#[test]
fn test_cli_help() {
    er_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("preview"))
        .stdout(predicate::str::contains("solve"))
        .stdout(predicate::str::contains("refresh"));
}
