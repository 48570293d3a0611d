//! `treadfit init` command - Create a new project

use std::path::PathBuf;

use console::style;
use miette::Result;

use crate::core::project::{Manifest, Project};

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Inventory directory name, relative to the project root
    #[arg(long, default_value = "tires")]
    pub inventory_dir: String,
}

pub fn run(args: InitArgs) -> Result<()> {
    let manifest = Manifest {
        inventory_dir: args.inventory_dir,
    };

    let project =
        Project::init(&args.path, manifest).map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Initialized treadfit project at {}",
        style("✓").green(),
        style(project.root().display()).cyan()
    );
    println!(
        "  Inventory directory: {}",
        style(project.inventory_dir().display()).cyan()
    );
    println!(
        "  Add records with {} or drop markdown files in directly.",
        style("treadfit new").yellow()
    );

    Ok(())
}
