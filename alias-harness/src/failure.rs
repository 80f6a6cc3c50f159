//! Failure categorization for the harness
//!
//! Categorizes failures to help identify root causes:
//! - Setup: the fixture cannot prove anything (indistinguishable helpers)
//! - Delegation: a wrapper returned something other than its helper's value
//! - Consistency: wrappers of the same module disagree
//! - Isolation: a wrapper resolved to another module's helper
//! - Expectation: scenario assertions did not hold

use std::fmt;

use serde::Serialize;

/// Category of failure for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCategory {
    /// Fixture problem that makes resolution unobservable
    Setup,
    /// Wrapper value differs from its declared helper
    Delegation,
    /// Same-module wrappers observed different values
    Consistency,
    /// Wrapper value matches a helper from a different module
    Isolation,
    /// Scenario value or impact assertion failed
    Expectation,
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureCategory::Setup => write!(f, "Setup"),
            FailureCategory::Delegation => write!(f, "Delegation"),
            FailureCategory::Consistency => write!(f, "Consistency"),
            FailureCategory::Isolation => write!(f, "Isolation"),
            FailureCategory::Expectation => write!(f, "Expectation"),
        }
    }
}

/// A failure with category and details
#[derive(Debug, Clone, Serialize)]
pub struct CategorizedFailure {
    /// Category of the failure
    pub category: FailureCategory,
    /// Short description of what failed
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl CategorizedFailure {
    /// Create a new categorized failure
    pub fn new(category: FailureCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the failure
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors for common failures

    /// Two modules' helpers return the same value
    pub fn indistinguishable_helpers(first: &str, second: &str, value: i64) -> Self {
        Self::new(
            FailureCategory::Setup,
            format!("Helpers in {} and {} are indistinguishable", first, second),
        )
        .with_details(format!("Both return {}", value))
    }

    /// Wrapper did not return its helper's value
    pub fn delegation_mismatch(caller: impl Into<String>, expected: i64, actual: i64) -> Self {
        Self::new(
            FailureCategory::Delegation,
            format!("{} does not delegate to its helper", caller.into()),
        )
        .with_details(format!("Expected: {}, Actual: {}", expected, actual))
    }

    /// Wrappers of one module disagree
    pub fn inconsistent_module(module: impl Into<String>, values: impl Into<String>) -> Self {
        Self::new(
            FailureCategory::Consistency,
            format!("Callers of {} observed different values", module.into()),
        )
        .with_details(values)
    }

    /// Wrapper resolved into a different module
    pub fn resolved_elsewhere(caller: impl Into<String>, other_module: impl Into<String>) -> Self {
        Self::new(
            FailureCategory::Isolation,
            format!("{} resolves to the wrong module", caller.into()),
        )
        .with_details(format!("Value matches helper in {}", other_module.into()))
    }

    /// Scenario names a caller the fixture does not have
    pub fn unknown_caller(caller: impl Into<String>) -> Self {
        Self::new(
            FailureCategory::Expectation,
            format!("Unknown caller: {}", caller.into()),
        )
    }

    /// Scenario value assertion failed
    pub fn value_mismatch(caller: impl Into<String>, expected: i64, actual: i64) -> Self {
        Self::new(
            FailureCategory::Expectation,
            format!("Wrong value from {}", caller.into()),
        )
        .with_details(format!("Expected: {}, Actual: {}", expected, actual))
    }

    /// Scenario impact assertion failed
    pub fn impact_mismatch(
        module: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(
            FailureCategory::Expectation,
            format!("Wrong callers impacted by {}", module.into()),
        )
        .with_details(format!(
            "Expected: {}, Actual: {}",
            expected.into(),
            actual.into()
        ))
    }
}

impl fmt::Display for CategorizedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " - {}", details)?;
        }
        Ok(())
    }
}
