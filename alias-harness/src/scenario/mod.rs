//! Scenario loading and types
//!
//! This module handles parsing scenario directories into structured types.

mod loader;
mod types;

pub use loader::{list_scenarios, load_scenario};
pub use types::{
    Assertions, ExpectedState, FixtureGroup, ImpactAssertion, Scenario, ScenarioConfig,
    SCHEMA_VERSION,
};
