//! alias-harness CLI
//!
//! Verifies that every fixture wrapper resolves to the helper it names.

use std::path::PathBuf;

use alias_harness::commands::{self, run::RunConfig};
use alias_harness::{output, verify_call_sites, HarnessConfig};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "alias-harness")]
#[command(about = "Verification harness for import alias resolution")]
struct Cli {
    /// Path to config file (default: ~/.config/alias-harness/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify every fixture call site
    Check,
    /// Run a scenario (all scenarios when no name is given)
    Run {
        /// Scenario name (directory in scenarios/)
        scenario: Option<String>,

        /// Path to scenarios directory (default: ./scenarios)
        #[arg(long)]
        scenarios_dir: Option<PathBuf>,
    },
    /// Show callers impacted by a change to a module
    Impact {
        /// Module path, e.g. util_a or pkg_a::util
        module: String,
    },
    /// List fixture call sites
    List,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = HarnessConfig::load(cli.config.as_deref())?;
    let json = cli.json || config.json;

    match cli.command {
        Commands::Check => {
            let result = verify_call_sites(&alias_fixture::call_sites());
            output::print_check(&result, json)?;
            if !result.passed {
                std::process::exit(1);
            }
        }
        Commands::Run {
            scenario,
            scenarios_dir,
        } => {
            let run_config = RunConfig {
                scenarios_dir: scenarios_dir.unwrap_or(config.scenarios_dir),
            };

            let results = match scenario {
                Some(name) => vec![commands::run::run(&name, &run_config)?],
                None => commands::run::run_all(&run_config)?,
            };

            output::print_run(&results, json)?;
            if results.iter().any(|r| !r.verify.passed) {
                std::process::exit(1);
            }
        }
        Commands::Impact { module } => {
            let report = commands::impact::run(&module);
            output::print_impact(&report, json)?;
        }
        Commands::List => {
            output::print_call_sites(&alias_fixture::call_sites(), json)?;
        }
    }

    Ok(())
}
