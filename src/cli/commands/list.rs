//! `treadfit list` command - List inventory records with filtering

use console::style;
use miette::Result;

use crate::cli::helpers::resolve_inventory_dir;
use crate::cli::output::{effective_format, print_records};
use crate::cli::{GlobalOpts, OutputFormat, StockFilter};
use crate::core::size::normalize;
use crate::inventory::{Inventory, TireRecord};

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by stock status
    #[arg(long, short = 's', default_value = "all")]
    pub stock: StockFilter,

    /// Filter by brand (case-insensitive exact match)
    #[arg(long, short = 'b')]
    pub brand: Option<String>,

    /// Filter by tire size (input is normalized first)
    #[arg(long)]
    pub size: Option<String>,

    /// Search in title, brand, and model (case-insensitive substring)
    #[arg(long)]
    pub search: Option<String>,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let dir = resolve_inventory_dir(global)?;
    let inventory = Inventory::cached(&dir);

    let wanted_size = match &args.size {
        Some(raw) => match normalize(raw) {
            Some(size) => Some(size),
            None => {
                return Err(miette::miette!(
                    "'{}' is not a recognizable tire size",
                    raw
                ))
            }
        },
        None => None,
    };

    let records: Vec<TireRecord> = inventory
        .records()
        .iter()
        .filter(|r| args.stock.matches(r))
        .filter(|r| {
            args.brand
                .as_ref()
                .map_or(true, |b| r.brand.eq_ignore_ascii_case(b))
        })
        .filter(|r| wanted_size.map_or(true, |s| r.size_norm == Some(s)))
        .filter(|r| {
            args.search.as_ref().map_or(true, |needle| {
                let needle = needle.to_lowercase();
                r.title.to_lowercase().contains(&needle)
                    || r.brand.to_lowercase().contains(&needle)
                    || r.model.to_lowercase().contains(&needle)
            })
        })
        .cloned()
        .collect();

    let format = effective_format(global.format, true);
    if records.is_empty() {
        if format == OutputFormat::Table {
            println!("No records found");
        } else {
            print_records(&records, format)?;
        }
        return Ok(());
    }

    print_records(&records, format)?;

    if format == OutputFormat::Table {
        println!("\n{} record(s) found", records.len());
        if !inventory.skipped().is_empty() {
            println!(
                "{} {} file(s) skipped; run {} for details",
                style("warning:").yellow().bold(),
                inventory.skipped().len(),
                style("treadfit validate").yellow()
            );
        }
    }

    Ok(())
}
