//! Change impact over the call-site manifest
//!
//! A changed module impacts exactly the call sites whose helper resolves into
//! it. Every impacted caller sits one call away from the changed helper.

use alias_fixture::CallSite;
use serde::Serialize;

/// Relationship recorded for a wrapper that calls the changed helper
pub const CALLED_BY: &str = "called_by";

/// Call sites resolving into `module`, ordered by `(caller_path, caller)`.
///
/// An unknown module impacts nothing.
pub fn impacted_callers<'a>(sites: &'a [CallSite], module: &str) -> Vec<&'a CallSite> {
    let mut impacted: Vec<&CallSite> = sites
        .iter()
        .filter(|site| site.callee_module == module)
        .collect();
    impacted.sort_by(|a, b| (a.caller_path, a.caller).cmp(&(b.caller_path, b.caller)));
    impacted
}

/// Distinct callee modules, sorted.
pub fn modules(sites: &[CallSite]) -> Vec<&'static str> {
    let mut modules: Vec<&'static str> = sites.iter().map(|site| site.callee_module).collect();
    modules.sort_unstable();
    modules.dedup();
    modules
}

/// One impacted wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImpactedCaller {
    pub symbol: String,
    pub caller_path: String,
    pub qualified_caller: String,
    pub style: String,
    pub relationship: &'static str,
    pub distance: u32,
}

/// Callers impacted by a change to one module
#[derive(Debug, Clone, Serialize)]
pub struct ImpactReport {
    pub changed_module: String,
    pub impacted: Vec<ImpactedCaller>,
}

impl ImpactReport {
    pub fn build(sites: &[CallSite], changed_module: &str) -> Self {
        let impacted = impacted_callers(sites, changed_module)
            .into_iter()
            .map(|site| ImpactedCaller {
                symbol: site.caller.to_string(),
                caller_path: site.caller_path.to_string(),
                qualified_caller: site.qualified_caller(),
                style: site.style.to_string(),
                relationship: CALLED_BY,
                distance: 1,
            })
            .collect();

        Self {
            changed_module: changed_module.to_string(),
            impacted,
        }
    }

    pub fn qualified_callers(&self) -> Vec<String> {
        self.impacted
            .iter()
            .map(|caller| caller.qualified_caller.clone())
            .collect()
    }
}
