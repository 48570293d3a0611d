//! `treadfit match` command - Match explicit OEM sizes against the inventory

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::resolve_inventory_dir;
use crate::cli::output::{effective_format, print_records};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::matcher::match_inventory;
use crate::inventory::Inventory;

#[derive(clap::Args, Debug)]
pub struct MatchArgs {
    /// OEM size string; repeat for staggered fitments
    #[arg(long = "size", value_name = "SIZE", required = true)]
    pub sizes: Vec<String>,
}

pub fn run(args: MatchArgs, global: &GlobalOpts) -> Result<()> {
    let dir = resolve_inventory_dir(global)?;
    let inventory = Inventory::cached(&dir);

    let report = match_inventory(&args.sizes, inventory.records());

    match effective_format(global.format, true) {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&report).into_diagnostic()?);
        }
        OutputFormat::Csv => print_records(&report.results, OutputFormat::Csv)?,
        format => {
            let wanted: Vec<String> = report
                .sizes_normalized
                .iter()
                .map(|s| s.to_string())
                .collect();
            if wanted.is_empty() {
                println!(
                    "{} none of the given sizes normalize; nothing can match",
                    style("warning:").yellow().bold()
                );
                return Ok(());
            }
            println!("Wanted sizes: {}\n", style(wanted.join(", ")).cyan());

            if report.results.is_empty() {
                println!("No matching in-stock records");
            } else {
                print_records(&report.results, format)?;
                println!("\n{} matching record(s)", report.results.len());
            }
        }
    }

    Ok(())
}
