//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands;

#[derive(Parser, Debug)]
#[command(
    name = "treadfit",
    version,
    about = "Plain-text tire inventory with vehicle fitment matching"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Inventory directory override (default: the project's configured directory)
    #[arg(long, global = true, env = "TREADFIT_INVENTORY_DIR")]
    pub inventory: Option<PathBuf>,
}

/// Output format for commands that print records
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table for lists, YAML for single records
    #[default]
    Auto,
    Table,
    Yaml,
    Json,
    Csv,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a treadfit project in the current directory
    Init(commands::init::InitArgs),

    /// Create a new inventory record
    New(commands::new::NewArgs),

    /// List inventory records with filtering
    List(commands::list::ListArgs),

    /// Show a single record by SKU
    Show(commands::show::ShowArgs),

    /// Normalize raw tire size strings to canonical form
    Normalize(commands::normalize::NormalizeArgs),

    /// Match explicit OEM tire sizes against the inventory
    Match(commands::match_cmd::MatchArgs),

    /// Look up OEM fitment for a vehicle and match it against the inventory
    Lookup(commands::lookup::LookupArgs),

    /// Check inventory records for problems
    Validate(commands::validate::ValidateArgs),

    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}
