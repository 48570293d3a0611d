//! `treadfit show` command - Show a single record by SKU

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::resolve_inventory_dir;
use crate::cli::output::effective_format;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::inventory::{Inventory, TireRecord};

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// SKU of the record to show (case-insensitive)
    pub sku: String,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let dir = resolve_inventory_dir(global)?;
    let inventory = Inventory::cached(&dir);

    let record = inventory
        .get(&args.sku)
        .ok_or_else(|| miette::miette!("No record found with SKU '{}'", args.sku))?;

    match effective_format(global.format, false) {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(record).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(record).into_diagnostic()?);
        }
        _ => print_pretty(record),
    }

    Ok(())
}

fn print_pretty(record: &TireRecord) {
    println!("{}  {}", style(&record.sku).cyan().bold(), record.title);
    if !record.brand.is_empty() || !record.model.is_empty() {
        println!("  Brand/Model: {} {}", record.brand, record.model);
    }
    match record.size_norm {
        Some(size) => println!("  Size:        {} (from '{}')", style(size).green(), record.raw_size()),
        None => println!(
            "  Size:        {} ('{}')",
            style("not parseable").yellow(),
            record.raw_size()
        ),
    }
    if let Some(price) = record.price {
        println!("  Price:       {:.2}", price);
    }
    println!(
        "  Stock:       {}",
        if record.in_stock {
            style("in stock").green()
        } else {
            style("out of stock").red()
        }
    );
    if let Some(date) = record.date {
        println!("  Added:       {}", date);
    }
    println!("  URL:         {}", record.url);
    if !record.images.is_empty() {
        println!("  Images:      {}", record.images.len());
    }
}
