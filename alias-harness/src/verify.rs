//! Resolution verification for fixture call sites.
//!
//! Runs every wrapper and its declared helper, then checks that the value a
//! wrapper returns could only have come from the module it claims to call.

use std::collections::BTreeMap;

use alias_fixture::CallSite;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::failure::CategorizedFailure;
use crate::resolution::ImpactReport;
use crate::scenario::Assertions;

/// Outcome of a verification pass
#[derive(Debug, Clone, Serialize)]
pub struct VerifyResult {
    /// Whether every check passed
    pub passed: bool,
    /// Value returned by each wrapper, keyed by qualified caller
    pub observed: BTreeMap<String, i64>,
    /// List of failures (empty if passed)
    pub failures: Vec<CategorizedFailure>,
    /// When the checks ran
    pub checked_at: DateTime<Utc>,
}

impl VerifyResult {
    fn new(observed: BTreeMap<String, i64>, failures: Vec<CategorizedFailure>) -> Self {
        Self {
            passed: failures.is_empty(),
            observed,
            failures,
            checked_at: Utc::now(),
        }
    }

    fn push(&mut self, failure: CategorizedFailure) {
        self.failures.push(failure);
        self.passed = false;
    }
}

/// Verify delegation, isolation and consistency for a set of call sites.
pub fn verify_call_sites(sites: &[CallSite]) -> VerifyResult {
    let mut failures = Vec::new();
    let mut observed = BTreeMap::new();

    // Helper value per module, grouped by the file that imports them. Only
    // modules imported side by side can be confused with each other.
    let mut helpers: BTreeMap<&str, BTreeMap<&str, i64>> = BTreeMap::new();
    for site in sites {
        helpers
            .entry(site.caller_path)
            .or_default()
            .entry(site.callee_module)
            .or_insert_with(|| (site.helper)());
    }

    for modules in helpers.values() {
        let entries: Vec<(&str, i64)> = modules.iter().map(|(m, v)| (*m, *v)).collect();
        for (i, (first, value)) in entries.iter().enumerate() {
            for (second, other) in &entries[i + 1..] {
                if value == other {
                    failures.push(CategorizedFailure::indistinguishable_helpers(
                        first, second, *value,
                    ));
                }
            }
        }
    }

    let mut by_module: BTreeMap<&str, Vec<(String, i64)>> = BTreeMap::new();
    for site in sites {
        let caller = site.qualified_caller();
        let actual = (site.invoke)();
        let expected = (site.helper)();
        debug!(
            caller = %caller,
            module = site.callee_module,
            style = %site.style,
            actual,
            expected,
            "checked call site"
        );

        if actual != expected {
            failures.push(CategorizedFailure::delegation_mismatch(
                &caller, expected, actual,
            ));
        }

        if let Some(siblings) = helpers.get(site.caller_path) {
            for (other, value) in siblings {
                if *other != site.callee_module && *value == actual && *value != expected {
                    failures.push(CategorizedFailure::resolved_elsewhere(&caller, *other));
                }
            }
        }

        by_module
            .entry(site.callee_module)
            .or_default()
            .push((caller.clone(), actual));
        observed.insert(caller, actual);
    }

    for (module, values) in &by_module {
        let first = values.first().map(|(_, v)| *v);
        if values.iter().any(|(_, v)| Some(*v) != first) {
            let listing = values
                .iter()
                .map(|(caller, value)| format!("{}={}", caller, value))
                .collect::<Vec<_>>()
                .join(", ");
            failures.push(CategorizedFailure::inconsistent_module(*module, listing));
        }
    }

    VerifyResult::new(observed, failures)
}

/// Verify call sites, then check scenario value and impact assertions.
pub fn verify_expectations(sites: &[CallSite], assertions: &Assertions) -> VerifyResult {
    let mut result = verify_call_sites(sites);

    for (caller, expected) in &assertions.values {
        match result.observed.get(caller).copied() {
            None => result.push(CategorizedFailure::unknown_caller(caller)),
            Some(actual) if actual != *expected => {
                result.push(CategorizedFailure::value_mismatch(caller, *expected, actual))
            }
            Some(_) => {}
        }
    }

    for assertion in &assertions.impact {
        let report = ImpactReport::build(sites, &assertion.changed_module);
        let mut actual = report.qualified_callers();
        actual.sort();
        let mut expected = assertion.callers.clone();
        expected.sort();
        expected.dedup();

        debug!(
            module = %assertion.changed_module,
            impacted = actual.len(),
            "checked impact assertion"
        );

        if actual != expected {
            result.push(CategorizedFailure::impact_mismatch(
                &assertion.changed_module,
                format!("[{}]", expected.join(", ")),
                format!("[{}]", actual.join(", ")),
            ));
        }
    }

    result
}
