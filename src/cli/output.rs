//! Output formatting utilities

use std::io;

use miette::{IntoDiagnostic, Result};
use tabled::{settings::Style, Table, Tabled};

use crate::cli::helpers::truncate_str;
use crate::cli::OutputFormat;
use crate::inventory::TireRecord;

/// Determine the effective output format based on context
pub fn effective_format(format: OutputFormat, is_list: bool) -> OutputFormat {
    match format {
        OutputFormat::Auto => {
            if is_list {
                OutputFormat::Table
            } else {
                OutputFormat::Yaml
            }
        }
        other => other,
    }
}

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "SKU")]
    sku: String,
    #[tabled(rename = "SIZE")]
    size: String,
    #[tabled(rename = "BRAND")]
    brand: String,
    #[tabled(rename = "MODEL")]
    model: String,
    #[tabled(rename = "PRICE")]
    price: String,
    #[tabled(rename = "STOCK")]
    stock: String,
}

impl From<&TireRecord> for RecordRow {
    fn from(record: &TireRecord) -> Self {
        RecordRow {
            sku: record.sku.clone(),
            size: record
                .size_norm
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
            brand: truncate_str(&record.brand, 20),
            model: truncate_str(&record.model, 24),
            price: record
                .price
                .map(|p| format!("{:.2}", p))
                .unwrap_or_else(|| "-".to_string()),
            stock: if record.in_stock { "in stock" } else { "out" }.to_string(),
        }
    }
}

/// Print a list of records in the requested format
pub fn print_records(records: &[TireRecord], format: OutputFormat) -> Result<()> {
    match effective_format(format, true) {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(records).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&records).into_diagnostic()?);
        }
        OutputFormat::Csv => print_csv(records)?,
        _ => {
            if records.is_empty() {
                return Ok(());
            }
            let rows: Vec<RecordRow> = records.iter().map(RecordRow::from).collect();
            let mut table = Table::new(rows);
            table.with(Style::sharp());
            println!("{}", table);
        }
    }
    Ok(())
}

fn print_csv(records: &[TireRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    wtr.write_record([
        "sku", "title", "brand", "model", "price", "size", "sizeNorm", "inStock", "url",
    ])
    .into_diagnostic()?;
    for record in records {
        wtr.write_record([
            record.sku.clone(),
            record.title.clone(),
            record.brand.clone(),
            record.model.clone(),
            record.price.map(|p| p.to_string()).unwrap_or_default(),
            record.raw_size(),
            record
                .size_norm
                .map(|s| s.to_string())
                .unwrap_or_default(),
            record.in_stock.to_string(),
            record.url.clone(),
        ])
        .into_diagnostic()?;
    }
    wtr.flush().into_diagnostic()?;
    Ok(())
}
