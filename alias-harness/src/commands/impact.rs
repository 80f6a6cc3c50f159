//! Impact command implementation

use alias_fixture::call_sites;
use tracing::warn;

use crate::resolution::{modules, ImpactReport};

/// Report the fixture callers impacted by a change to `module`
pub fn run(module: &str) -> ImpactReport {
    let sites = call_sites();
    let report = ImpactReport::build(&sites, module);
    if report.impacted.is_empty() {
        warn!(
            module,
            known = %modules(&sites).join(", "),
            "no call sites resolve into this module"
        );
    }
    report
}
