//! CLI tests for alias-harness

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Harness binary isolated from the user's config and environment
fn alias_harness(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("alias-harness").expect("Failed to find alias-harness binary");
    cmd.arg("--config")
        .arg(config_dir.join("config.toml"))
        .env_remove("ALIAS_HARNESS_SCENARIOS_DIR")
        .env_remove("ALIAS_HARNESS_JSON")
        .env_remove("RUST_LOG");
    cmd
}

fn scenarios_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios")
}

#[test]
fn check_passes_for_fixture() {
    let temp = TempDir::new().unwrap();
    alias_harness(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS: call sites"))
        .stdout(predicate::str::contains("app::run_namespace_a = 1"))
        .stdout(predicate::str::contains("module_app::run_alias_b = 2"));
}

#[test]
fn check_json_reports_observed_values() {
    let temp = TempDir::new().unwrap();
    let output = alias_harness(temp.path())
        .args(["check", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(payload["passed"], true);
    assert_eq!(payload["observed"]["app::run_alias_a"], 1);
    assert_eq!(payload["observed"]["app::run_alias_b"], 2);
    assert!(payload["failures"].as_array().unwrap().is_empty());
}

#[test]
fn run_named_scenario() {
    let temp = TempDir::new().unwrap();
    alias_harness(temp.path())
        .args(["run", "02-module-alias", "--scenarios-dir"])
        .arg(scenarios_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS: 02-module-alias"))
        .stdout(predicate::str::contains("01-namespace-alias").not());
}

#[test]
fn run_uses_scenarios_dir_from_config_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("config.toml"),
        format!("scenarios_dir = {:?}\n", scenarios_dir().display().to_string()),
    )
    .unwrap();

    alias_harness(temp.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS: 01-namespace-alias"))
        .stdout(predicate::str::contains("PASS: 02-module-alias"));
}

#[test]
fn run_failing_scenario_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    let scenario = temp.path().join("scenarios").join("01-wrong");
    std::fs::create_dir_all(&scenario).unwrap();
    std::fs::write(scenario.join("scenario.json"), r#"{"fixture": "app"}"#).unwrap();
    std::fs::write(
        scenario.join("expected.json"),
        r#"{"schema_version": 1, "assertions": {"values": {"app::run_alias_b": 1}}}"#,
    )
    .unwrap();

    alias_harness(temp.path())
        .args(["run", "01-wrong", "--scenarios-dir"])
        .arg(temp.path().join("scenarios"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL: 01-wrong"))
        .stdout(predicate::str::contains(
            "[Expectation] Wrong value from app::run_alias_b - Expected: 1, Actual: 2",
        ));
}

#[test]
fn run_without_any_scenarios_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("notes")).unwrap();

    alias_harness(temp.path())
        .arg("run")
        .arg("--scenarios-dir")
        .arg(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no scenarios found in"));
}

#[test]
fn run_missing_scenario_reports_error() {
    let temp = TempDir::new().unwrap();
    alias_harness(temp.path())
        .args(["run", "nope", "--scenarios-dir"])
        .arg(scenarios_dir())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load scenario: nope"));
}

#[test]
fn impact_lists_only_callers_of_changed_module() {
    let temp = TempDir::new().unwrap();
    alias_harness(temp.path())
        .args(["impact", "util_a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("impacted: 2"))
        .stdout(predicate::str::contains("app::run_namespace_a (namespace, called_by, distance 1)"))
        .stdout(predicate::str::contains("app::run_alias_a (named_alias, called_by, distance 1)"))
        .stdout(predicate::str::contains("run_namespace_b").not())
        .stdout(predicate::str::contains("run_alias_b").not());
}

#[test]
fn impact_json_for_module_alias() {
    let temp = TempDir::new().unwrap();
    let output = alias_harness(temp.path())
        .args(["--json", "impact", "pkg_a::util"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(payload["changed_module"], "pkg_a::util");
    let symbols: Vec<&str> = payload["impacted"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["symbol"].as_str().unwrap())
        .collect();
    assert_eq!(symbols, vec!["run_alias_a", "run_module_a"]);
}

#[test]
fn json_env_switches_output() {
    let temp = TempDir::new().unwrap();
    let output = alias_harness(temp.path())
        .env("ALIAS_HARNESS_JSON", "true")
        .arg("list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 8);
    assert_eq!(rows[0]["caller"], "app::run_namespace_a");
    assert_eq!(rows[0]["style"], "namespace");
}

#[test]
fn list_shows_resolution_targets() {
    let temp = TempDir::new().unwrap();
    alias_harness(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "module_app::run_module_b -> pkg_b::util::helper [module_alias]",
        ));
}
