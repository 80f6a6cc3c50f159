//! Typed errors for scenario handling

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unsupported schema_version {found} in expected.json (supported: {supported})")]
    UnsupportedSchema { found: u32, supported: u32 },

    #[error("invalid scenario directory name: {}", .0.display())]
    InvalidName(PathBuf),

    #[error("no scenarios found in {}", .0.display())]
    NoScenarios(PathBuf),
}
