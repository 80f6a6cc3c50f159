//! Scenario types for resolution testing

use std::collections::BTreeMap;
use std::path::PathBuf;

use alias_fixture::CallSite;
use serde::{Deserialize, Serialize};

/// The only expected.json layout this harness understands
pub const SCHEMA_VERSION: u32 = 1;

/// A parsed scenario from a scenario directory
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Scenario name (directory name)
    pub name: String,
    /// Path to scenario directory
    pub path: PathBuf,
    /// Which wrappers the scenario covers
    pub fixture: FixtureGroup,
    /// Free-form description from scenario.json
    pub description: Option<String>,
    /// Expected state/assertions from expected.json
    pub expected: ExpectedState,
}

/// Contents of scenario.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub fixture: FixtureGroup,
    #[serde(default)]
    pub description: Option<String>,
}

/// Group of call sites a scenario runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureGroup {
    /// Namespace and aliased-item wrappers in `app`
    App,
    /// Aliased-module and aliased-item wrappers in `module_app`
    ModuleApp,
    All,
}

impl FixtureGroup {
    /// Whether a call site belongs to this group
    pub fn includes(&self, site: &CallSite) -> bool {
        match self {
            FixtureGroup::App => site.caller_path == "app",
            FixtureGroup::ModuleApp => site.caller_path == "module_app",
            FixtureGroup::All => true,
        }
    }
}

/// Expected state from expected.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectedState {
    /// Schema version for forward compatibility
    pub schema_version: u32,
    /// Assertions to verify against the fixture
    pub assertions: Assertions,
}

/// Assertions about fixture behaviour
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Assertions {
    /// Expected return value per qualified caller
    #[serde(default)]
    pub values: BTreeMap<String, i64>,
    /// Expected impact sets per changed module
    #[serde(default)]
    pub impact: Vec<ImpactAssertion>,
}

/// Callers that must be impacted, and only those, when a module changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactAssertion {
    pub changed_module: String,
    pub callers: Vec<String>,
}
