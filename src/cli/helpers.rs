//! Shared helper functions for CLI commands

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::project::Project;

/// Resolve the inventory directory: the `--inventory` override if given,
/// else the discovered project's configured directory
pub fn resolve_inventory_dir(global: &GlobalOpts) -> Result<PathBuf> {
    if let Some(dir) = &global.inventory {
        return Ok(dir.clone());
    }
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    Ok(project.inventory_dir())
}

/// Truncate a string to max_len, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}

/// Read size strings from stdin if available (Unix philosophy support)
///
/// Returns `Some(Vec<String>)` when stdin is piped (not a terminal), or
/// `None` in interactive mode. This enables pipelines like:
/// ```bash
/// cut -f2 oem-sizes.tsv | treadfit normalize
/// ```
///
/// Sizes are read one per line; blank lines are ignored.
pub fn read_sizes_from_stdin() -> Option<Vec<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return None;
    }

    let sizes: Vec<String> = stdin
        .lock()
        .lines()
        .map_while(|line| line.ok())
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    Some(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 16), "short");
        assert_eq!(
            truncate_str("a very long tire product title", 10),
            "a very ..."
        );
    }
}
