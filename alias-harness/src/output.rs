//! Text and JSON rendering for command results

use alias_fixture::CallSite;
use anyhow::Result;
use serde::Serialize;

use crate::commands::run::RunResult;
use crate::resolution::ImpactReport;
use crate::verify::VerifyResult;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_verify_body(result: &VerifyResult) {
    for (caller, value) in &result.observed {
        println!("  {caller} = {value}");
    }
    if !result.failures.is_empty() {
        println!("  Failures:");
        for failure in &result.failures {
            println!("    - {failure}");
        }
    }
}

pub fn print_check(result: &VerifyResult, json: bool) -> Result<()> {
    if json {
        return print_json(result);
    }

    println!("{}: call sites", if result.passed { "PASS" } else { "FAIL" });
    print_verify_body(result);
    Ok(())
}

pub fn print_run(results: &[RunResult], json: bool) -> Result<()> {
    if json {
        return print_json(&results);
    }

    for result in results {
        if result.verify.passed {
            println!("PASS: {}", result.scenario_name);
        } else {
            println!("FAIL: {}", result.scenario_name);
        }
        print_verify_body(&result.verify);
    }
    Ok(())
}

pub fn print_impact(report: &ImpactReport, json: bool) -> Result<()> {
    if json {
        return print_json(report);
    }

    println!("changed_module: {}", report.changed_module);
    println!("impacted: {}", report.impacted.len());
    for caller in &report.impacted {
        println!(
            "  {} ({}, {}, distance {})",
            caller.qualified_caller, caller.style, caller.relationship, caller.distance
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct CallSiteRow {
    caller: String,
    style: String,
    callee_module: &'static str,
}

pub fn print_call_sites(sites: &[CallSite], json: bool) -> Result<()> {
    let rows: Vec<CallSiteRow> = sites
        .iter()
        .map(|site| CallSiteRow {
            caller: site.qualified_caller(),
            style: site.style.to_string(),
            callee_module: site.callee_module,
        })
        .collect();

    if json {
        return print_json(&rows);
    }

    for row in &rows {
        println!("{} -> {}::helper [{}]", row.caller, row.callee_module, row.style);
    }
    Ok(())
}
