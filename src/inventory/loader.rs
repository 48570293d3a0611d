//! Inventory loading and the process-wide cache
//!
//! The inventory is scanned from a directory of markdown files, in file-name
//! order. Unreadable or malformed files are skipped and recorded, never
//! fatal; a missing directory is an empty inventory. The cache is an
//! immutable value behind a `OnceLock`: the first caller populates it and
//! everyone afterwards reads the same value, so a race to populate is
//! harmless. Filesystem changes are picked up only on process restart.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use walkdir::WalkDir;

use crate::inventory::frontmatter;
use crate::inventory::record::TireRecord;

static CACHE: OnceLock<Inventory> = OnceLock::new();

/// A file the scan could not turn into a record
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// The scanned inventory: records in file-name order, plus skipped files
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    records: Vec<TireRecord>,
    skipped: Vec<SkippedFile>,
}

impl Inventory {
    /// Scan a directory of markdown records. A missing directory yields an
    /// empty inventory rather than an error.
    pub fn scan(dir: &Path) -> Inventory {
        if !dir.exists() {
            return Inventory::default();
        }

        let mut records = Vec::new();
        let mut skipped = Vec::new();

        for entry in WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.extension().is_some_and(|e| e == "md") {
                continue;
            }

            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    skipped.push(SkippedFile {
                        path: path.to_path_buf(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let filename = path.display().to_string();
            match frontmatter::parse::<TireRecord>(&content, &filename) {
                Ok(mut record) => {
                    record.finalize();
                    records.push(record);
                }
                Err(e) => skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }),
            }
        }

        Inventory { records, skipped }
    }

    /// Process-wide memoized scan. The first call scans `dir` and every
    /// later call returns the same inventory regardless of argument, so
    /// callers must pass the project's configured directory.
    pub fn cached(dir: &Path) -> &'static Inventory {
        CACHE.get_or_init(|| Inventory::scan(dir))
    }

    /// Records in file-name order
    pub fn records(&self) -> &[TireRecord] {
        &self.records
    }

    /// Files the scan skipped
    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by SKU (case-insensitive)
    pub fn get(&self, sku: &str) -> Option<&TireRecord> {
        self.records
            .iter()
            .find(|r| r.sku.eq_ignore_ascii_case(sku))
    }
}
