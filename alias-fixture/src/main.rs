//! alias-fixture CLI
//!
//! Prints the value every wrapper returns.

use alias_fixture::{call_sites, ImportStyle};
use clap::Parser;

#[derive(Parser)]
#[command(name = "alias-fixture")]
#[command(about = "Print the value returned by each fixture wrapper")]
struct Cli {
    /// Only print wrappers using this import style
    #[arg(short, long, value_enum)]
    style: Option<ImportStyle>,
}

fn main() {
    let cli = Cli::parse();

    for site in call_sites() {
        if cli.style.is_some_and(|style| style != site.style) {
            continue;
        }
        println!("{} = {}", site.qualified_caller(), (site.invoke)());
    }
}
