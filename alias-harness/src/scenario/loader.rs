//! Scenario loader

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::types::{ExpectedState, Scenario, ScenarioConfig, SCHEMA_VERSION};
use crate::error::ScenarioError;

/// Load a scenario from a directory
pub fn load_scenario(scenario_dir: &Path) -> Result<Scenario> {
    if !scenario_dir.is_dir() {
        return Err(ScenarioError::NotFound(scenario_dir.to_path_buf()).into());
    }

    let name = scenario_dir
        .file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .ok_or_else(|| ScenarioError::InvalidName(scenario_dir.to_path_buf()))?;

    // Load scenario.json (required)
    let config_path = scenario_dir.join("scenario.json");
    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read scenario.json at {}", config_path.display()))?;
    let config: ScenarioConfig = serde_json::from_str(&config_content)
        .with_context(|| format!("Failed to parse scenario.json at {}", config_path.display()))?;

    // Load expected.json (required)
    let expected_path = scenario_dir.join("expected.json");
    let expected_content = fs::read_to_string(&expected_path).with_context(|| {
        format!(
            "Failed to read expected.json at {}",
            expected_path.display()
        )
    })?;
    let expected: ExpectedState = serde_json::from_str(&expected_content).with_context(|| {
        format!(
            "Failed to parse expected.json at {}",
            expected_path.display()
        )
    })?;

    if expected.schema_version != SCHEMA_VERSION {
        return Err(ScenarioError::UnsupportedSchema {
            found: expected.schema_version,
            supported: SCHEMA_VERSION,
        }
        .into());
    }

    Ok(Scenario {
        name,
        path: scenario_dir.to_path_buf(),
        fixture: config.fixture,
        description: config.description,
        expected,
    })
}

/// Names of all scenario directories (those holding a scenario.json), sorted
pub fn list_scenarios(scenarios_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(scenarios_dir).with_context(|| {
        format!(
            "Failed to read scenarios directory: {}",
            scenarios_dir.display()
        )
    })? {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if !path.join("scenario.json").is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}
