//! alias-harness library
//!
//! Verification harness for the alias-fixture import resolution fixture.

pub mod commands;
pub mod config;
pub mod error;
pub mod failure;
pub mod output;
pub mod resolution;
pub mod scenario;
pub mod verify;

pub use config::HarnessConfig;
pub use error::ScenarioError;
pub use failure::{CategorizedFailure, FailureCategory};
pub use resolution::{impacted_callers, ImpactReport, ImpactedCaller};
pub use verify::{verify_call_sites, verify_expectations, VerifyResult};
