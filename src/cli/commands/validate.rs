//! `treadfit validate` command - Check inventory records for problems
//!
//! Deliberately bypasses the process cache and rescans, so it always reports
//! the current state of the files on disk.

use std::collections::HashMap;

use console::style;
use miette::Result;

use crate::cli::helpers::resolve_inventory_dir;
use crate::cli::GlobalOpts;
use crate::inventory::Inventory;

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Strict mode - warnings become errors
    #[arg(long)]
    pub strict: bool,

    /// Show summary only, don't show individual problems
    #[arg(long)]
    pub summary: bool,
}

/// Validation statistics
#[derive(Default)]
struct ValidationStats {
    records: usize,
    errors: usize,
    warnings: usize,
}

pub fn run(args: ValidateArgs, global: &GlobalOpts) -> Result<()> {
    let dir = resolve_inventory_dir(global)?;
    let inventory = Inventory::scan(&dir);

    let mut stats = ValidationStats {
        records: inventory.len(),
        ..ValidationStats::default()
    };

    println!(
        "{} Validating {} record(s) in {}...\n",
        style("→").blue(),
        inventory.len(),
        dir.display()
    );

    for skipped in inventory.skipped() {
        stats.errors += 1;
        if !args.summary {
            println!("{} {}", style("✗").red(), skipped.reason);
        }
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    for record in inventory.records() {
        *seen.entry(record.sku.to_uppercase()).or_default() += 1;
    }

    for record in inventory.records() {
        if record.sku.trim().is_empty() {
            stats.errors += 1;
            if !args.summary {
                println!(
                    "{} record '{}' has an empty SKU",
                    style("✗").red(),
                    record.title
                );
            }
            continue;
        }

        if seen.get(&record.sku.to_uppercase()).copied().unwrap_or(0) > 1 {
            stats.errors += 1;
            if !args.summary {
                println!(
                    "{} duplicate SKU {}",
                    style("✗").red(),
                    style(&record.sku).cyan()
                );
            }
        }

        if record.size_norm.is_none() {
            stats.warnings += 1;
            if !args.summary {
                let raw = record.raw_size();
                if raw.is_empty() {
                    println!(
                        "{} {} has no size fields and will never match a fitment",
                        style("⚠").yellow(),
                        style(&record.sku).cyan()
                    );
                } else {
                    println!(
                        "{} {} size '{}' does not normalize and will never match a fitment",
                        style("⚠").yellow(),
                        style(&record.sku).cyan(),
                        raw
                    );
                }
            }
        }
    }

    println!(
        "\n{} record(s), {} error(s), {} warning(s)",
        stats.records, stats.errors, stats.warnings
    );

    let failed = stats.errors > 0 || (args.strict && stats.warnings > 0);
    if failed {
        return Err(miette::miette!("validation failed"));
    }

    println!("{} Inventory is valid", style("✓").green());
    Ok(())
}
