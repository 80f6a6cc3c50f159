//! Run command implementation
//!
//! Loads a scenario and verifies the fixture call sites it covers.

use std::path::PathBuf;

use alias_fixture::{call_sites, CallSite};
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::error::ScenarioError;
use crate::scenario::{list_scenarios, load_scenario, Scenario};
use crate::verify::{verify_expectations, VerifyResult};

/// Result of running a scenario
#[derive(Debug, Serialize)]
pub struct RunResult {
    /// Scenario that was run
    pub scenario_name: String,
    #[serde(flatten)]
    pub verify: VerifyResult,
}

/// Configuration for the run command
pub struct RunConfig {
    /// Path to scenarios directory
    pub scenarios_dir: PathBuf,
}

/// Run a single scenario by name
pub fn run(scenario_name: &str, config: &RunConfig) -> Result<RunResult> {
    let scenario_dir = config.scenarios_dir.join(scenario_name);
    let scenario = load_scenario(&scenario_dir)
        .with_context(|| format!("Failed to load scenario: {}", scenario_name))?;

    Ok(run_scenario(&scenario, &call_sites()))
}

/// Run every scenario in the scenarios directory, in name order
///
/// A directory without any scenario is an error, not an empty pass.
pub fn run_all(config: &RunConfig) -> Result<Vec<RunResult>> {
    let names = list_scenarios(&config.scenarios_dir)?;
    if names.is_empty() {
        return Err(ScenarioError::NoScenarios(config.scenarios_dir.clone()).into());
    }

    names.iter().map(|name| run(name, config)).collect()
}

/// Verify a loaded scenario against the given call sites
pub fn run_scenario(scenario: &Scenario, sites: &[CallSite]) -> RunResult {
    let selected: Vec<CallSite> = sites
        .iter()
        .filter(|site| scenario.fixture.includes(site))
        .copied()
        .collect();

    let verify = verify_expectations(&selected, &scenario.expected.assertions);
    info!(
        scenario = %scenario.name,
        call_sites = selected.len(),
        passed = verify.passed,
        "scenario finished"
    );

    RunResult {
        scenario_name: scenario.name.clone(),
        verify,
    }
}
