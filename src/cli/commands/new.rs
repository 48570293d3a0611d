//! `treadfit new` command - Author an inventory record

use std::fs;

use chrono::Utc;
use console::style;
use miette::{IntoDiagnostic, Result};
use rand::Rng;

use crate::cli::helpers::resolve_inventory_dir;
use crate::cli::GlobalOpts;
use crate::core::size::normalize;
use crate::inventory::TireRecord;

/// Alphabet for generated SKUs; 0/O and 1/I lookalikes excluded
const SKU_ALPHABET: &[u8] = b"23456789ABCDEFGHJKMNPQRSTVWXYZ";
const SKU_TAIL_LEN: usize = 8;

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// SKU (generated as TIRE-XXXXXXXX when omitted)
    #[arg(long)]
    pub sku: Option<String>,

    /// Display title (default: "BRAND MODEL SIZE")
    #[arg(long)]
    pub title: Option<String>,

    /// Tire brand
    #[arg(long)]
    pub brand: String,

    /// Tire model
    #[arg(long)]
    pub model: String,

    /// Manufacturer size string, e.g. "235/45ZR19 95W"
    #[arg(long)]
    pub size: String,

    /// Unit price
    #[arg(long)]
    pub price: Option<f64>,

    /// Mark the record out of stock
    #[arg(long)]
    pub out_of_stock: bool,
}

pub fn run(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let dir = resolve_inventory_dir(global)?;
    fs::create_dir_all(&dir).into_diagnostic()?;

    let sku = args.sku.unwrap_or_else(generate_sku);
    let canonical = normalize(&args.size);
    let title = args.title.unwrap_or_else(|| {
        let size = canonical
            .map(|s| s.to_string())
            .unwrap_or_else(|| args.size.clone());
        format!("{} {} {}", args.brand, args.model, size)
    });

    let mut record = TireRecord {
        sku: sku.clone(),
        title,
        brand: args.brand,
        model: args.model,
        size: args.size,
        price: args.price,
        in_stock: !args.out_of_stock,
        date: Some(Utc::now().date_naive()),
        ..TireRecord::default()
    };
    record.finalize();

    let path = dir.join(format!("{}.md", sku.to_lowercase()));
    if path.exists() {
        return Err(miette::miette!(
            "a record file already exists at {}",
            path.display()
        ));
    }

    // sizeNorm and url are derived at load time; don't persist them
    let mut to_write = record.clone();
    to_write.size_norm = None;
    to_write.url = String::new();
    let front_matter = serde_yml::to_string(&to_write).into_diagnostic()?;
    fs::write(&path, format!("---\n{}---\n\n{}\n", front_matter, record.title))
        .into_diagnostic()?;

    println!(
        "{} Created record {} at {}",
        style("✓").green(),
        style(&sku).cyan(),
        style(path.display()).cyan()
    );
    match record.size_norm {
        Some(size) => println!("  Canonical size: {}", style(size).cyan()),
        None => println!(
            "{} size '{}' does not normalize; this record will never match a fitment",
            style("warning:").yellow().bold(),
            record.size
        ),
    }

    Ok(())
}

fn generate_sku() -> String {
    let mut rng = rand::rng();
    let tail: String = (0..SKU_TAIL_LEN)
        .map(|_| {
            let idx = rng.random_range(0..SKU_ALPHABET.len());
            SKU_ALPHABET[idx] as char
        })
        .collect();
    format!("TIRE-{}", tail)
}
