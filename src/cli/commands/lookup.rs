//! `treadfit lookup` command - Fetch OEM fitment and match the inventory

use std::io::{self, IsTerminal};

use console::style;
use dialoguer::{theme::ColorfulTheme, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::resolve_inventory_dir;
use crate::cli::output::{effective_format, print_records};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::matcher::match_inventory;
use crate::core::Config;
use crate::fitment::FitmentClient;
use crate::inventory::Inventory;

#[derive(clap::Args, Debug)]
pub struct LookupArgs {
    /// Vehicle make, e.g. "bmw"
    #[arg(long)]
    pub make: String,

    /// Vehicle model, e.g. "3-series"
    #[arg(long)]
    pub model: String,

    /// Model year
    #[arg(long)]
    pub year: String,

    /// Modification (trim/engine variant) slug; offered interactively when
    /// omitted on a terminal
    #[arg(long)]
    pub modification: Option<String>,
}

pub fn run(args: LookupArgs, global: &GlobalOpts) -> Result<()> {
    let dir = resolve_inventory_dir(global)?;

    let config = Config::load();
    let key = config
        .api_key()
        .ok_or_else(|| miette::miette!("{}", crate::fitment::FitmentError::MissingApiKey))?;
    let client = FitmentClient::with_base(key, config.api_base())
        .map_err(|e| miette::miette!("{}", e))?;

    let modification = match args.modification {
        Some(modification) => modification,
        None => prompt_modification(&client, &args.make, &args.model, &args.year)?,
    };

    let sizes = client
        .tire_sizes(&args.make, &args.model, &args.year, &modification)
        .map_err(|e| miette::miette!("{}", e))?;

    let inventory = Inventory::cached(&dir);
    let report = match_inventory(&sizes, inventory.records());

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
            if report.sizes.is_empty() {
                println!(
                    "No OEM sizes found for {} {} {} ({})",
                    args.make, args.model, args.year, modification
                );
                return Ok(());
            }
            println!(
                "OEM sizes for {} {} {} ({}): {}",
                style(&args.make).cyan(),
                style(&args.model).cyan(),
                style(&args.year).cyan(),
                modification,
                report.sizes.join(", ")
            );
            let wanted: Vec<String> = report
                .sizes_normalized
                .iter()
                .map(|s| s.to_string())
                .collect();
            println!("Canonical: {}\n", style(wanted.join(", ")).cyan());

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

/// Fetch the modification list and offer it as an interactive select.
/// Refuses when stdin is not a terminal: pipelines must pass --modification.
fn prompt_modification(
    client: &FitmentClient,
    make: &str,
    model: &str,
    year: &str,
) -> Result<String> {
    if !io::stdin().is_terminal() {
        return Err(miette::miette!(
            "--modification is required when not running interactively"
        ));
    }

    let modifications = client
        .modifications(make, model, year)
        .map_err(|e| miette::miette!("{}", e))?;
    if modifications.is_empty() {
        return Err(miette::miette!(
            "no modifications found for {} {} {}",
            make,
            model,
            year
        ));
    }

    let labels: Vec<String> = modifications.iter().map(|m| m.label()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select modification")
        .items(&labels)
        .default(0)
        .interact()
        .into_diagnostic()?;

    Ok(modifications[selection].id())
}
