//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use std::fs;

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Helper to get a treadfit command
pub fn treadfit() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("treadfit"));
    // Keep tests hermetic from the developer's environment
    cmd.env_remove("WHEELSIZE_API_KEY");
    cmd.env_remove("WHEELSIZE_API_BASE");
    cmd.env_remove("TREADFIT_INVENTORY_DIR");
    cmd
}

/// Helper to create a test project in a temp directory
pub fn setup_test_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    treadfit()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success();
    tmp
}

/// Helper to write an inventory record file directly
pub fn write_record(tmp: &TempDir, name: &str, front_matter: &str) {
    let path = tmp.path().join("tires").join(name);
    fs::write(
        &path,
        format!("---\n{}\n---\n\nDescription.\n", front_matter.trim()),
    )
    .unwrap();
}

/// Helper to write a minimal record with a sku, size, and stock flag
pub fn write_simple_record(tmp: &TempDir, sku: &str, size: &str, in_stock: bool) {
    write_record(
        tmp,
        &format!("{}.md", sku.to_lowercase()),
        &format!("sku: {}\nsize: {}\ninStock: {}", sku, size, in_stock),
    );
}

/// Helper to create a record via `treadfit new`, returning its SKU
pub fn create_test_record(tmp: &TempDir, brand: &str, model: &str, size: &str) -> String {
    let output = treadfit()
        .current_dir(tmp.path())
        .args([
            "new", "--brand", brand, "--model", model, "--size", size,
        ])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .find(|l| l.contains("TIRE-"))
        .and_then(|l| l.split_whitespace().find(|w| w.starts_with("TIRE-")))
        .map(|s| s.to_string())
        .unwrap_or_default()
}
