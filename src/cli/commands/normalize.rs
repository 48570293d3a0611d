//! `treadfit normalize` command - Canonicalize raw size strings

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::helpers::read_sizes_from_stdin;
use crate::cli::output::effective_format;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::size::{normalize, TireSize};

#[derive(clap::Args, Debug)]
pub struct NormalizeArgs {
    /// Raw size strings (read from stdin when omitted in a pipeline)
    pub sizes: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Normalized {
    raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    canonical: Option<TireSize>,
}

pub fn run(args: NormalizeArgs, global: &GlobalOpts) -> Result<()> {
    let sizes = if args.sizes.is_empty() {
        read_sizes_from_stdin().unwrap_or_default()
    } else {
        args.sizes
    };

    if sizes.is_empty() {
        return Err(miette::miette!(
            "no sizes given (pass sizes as arguments or pipe them on stdin)"
        ));
    }

    let normalized: Vec<Normalized> = sizes
        .into_iter()
        .map(|raw| {
            let canonical = normalize(&raw);
            Normalized { raw, canonical }
        })
        .collect();

    match effective_format(global.format, true) {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&normalized).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&normalized).into_diagnostic()?);
        }
        _ => {
            for entry in &normalized {
                match entry.canonical {
                    Some(size) => println!("{}\t{}", entry.raw, style(size).green()),
                    None => println!("{}\t{}", entry.raw, style("(no match)").yellow()),
                }
            }
        }
    }

    Ok(())
}
