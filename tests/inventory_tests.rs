//! Inventory loading, listing, and authoring tests

mod common;

use common::{create_test_record, setup_test_project, treadfit, write_record, write_simple_record};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_list_empty_project() {
    let tmp = setup_test_project();

    treadfit()
        .current_dir(tmp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found"));
}

#[test]
fn test_list_missing_inventory_dir_is_empty() {
    let tmp = setup_test_project();
    fs::remove_dir(tmp.path().join("tires")).unwrap();

    treadfit()
        .current_dir(tmp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found"));
}

#[test]
fn test_list_shows_records() {
    let tmp = setup_test_project();
    write_simple_record(&tmp, "TIRE-A", "235/45ZR19 95W", true);
    write_simple_record(&tmp, "TIRE-B", "225/55R18", true);

    treadfit()
        .current_dir(tmp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("TIRE-A"))
        .stdout(predicate::str::contains("235/45R19"))
        .stdout(predicate::str::contains("TIRE-B"))
        .stdout(predicate::str::contains("2 record(s) found"));
}

#[test]
fn test_list_stock_filter() {
    let tmp = setup_test_project();
    write_simple_record(&tmp, "TIRE-A", "235/45R19", true);
    write_simple_record(&tmp, "TIRE-B", "225/55R18", false);

    treadfit()
        .current_dir(tmp.path())
        .args(["list", "--stock", "in-stock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TIRE-A"))
        .stdout(predicate::str::contains("TIRE-B").not());

    treadfit()
        .current_dir(tmp.path())
        .args(["list", "--stock", "out-of-stock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TIRE-B"))
        .stdout(predicate::str::contains("TIRE-A").not());
}

#[test]
fn test_list_size_filter_normalizes_input() {
    let tmp = setup_test_project();
    write_simple_record(&tmp, "TIRE-A", "235/45ZR19 95W", true);
    write_simple_record(&tmp, "TIRE-B", "225/55R18", true);

    treadfit()
        .current_dir(tmp.path())
        .args(["list", "--size", "235 / 45 R19"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TIRE-A"))
        .stdout(predicate::str::contains("TIRE-B").not());
}

#[test]
fn test_list_size_filter_rejects_garbage() {
    let tmp = setup_test_project();

    treadfit()
        .current_dir(tmp.path())
        .args(["list", "--size", "garbage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a recognizable tire size"));
}

#[test]
fn test_list_brand_filter_case_insensitive() {
    let tmp = setup_test_project();
    write_record(
        &tmp,
        "a.md",
        "sku: TIRE-A\nbrand: Michelin\nsize: 235/45R19",
    );
    write_record(
        &tmp,
        "b.md",
        "sku: TIRE-B\nbrand: Continental\nsize: 225/55R18",
    );

    treadfit()
        .current_dir(tmp.path())
        .args(["list", "--brand", "michelin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TIRE-A"))
        .stdout(predicate::str::contains("TIRE-B").not());
}

#[test]
fn test_list_skips_malformed_files() {
    let tmp = setup_test_project();
    write_simple_record(&tmp, "TIRE-A", "235/45R19", true);
    fs::write(tmp.path().join("tires/broken.md"), "no front matter here\n").unwrap();

    treadfit()
        .current_dir(tmp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("TIRE-A"))
        .stdout(predicate::str::contains("1 file(s) skipped"));
}

#[test]
fn test_list_json_wire_form() {
    let tmp = setup_test_project();
    write_record(
        &tmp,
        "a.md",
        "sku: TIRE-A\nwidth: 225\naspect: 55\nrim: 18",
    );

    let output = treadfit()
        .current_dir(tmp.path())
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["sku"], "TIRE-A");
    assert_eq!(parsed[0]["sizeNorm"], "225/55R18");
    assert_eq!(parsed[0]["inStock"], true);
    assert_eq!(parsed[0]["url"], "/tires/TIRE-A/");
}

#[test]
fn test_list_csv_output() {
    let tmp = setup_test_project();
    write_simple_record(&tmp, "TIRE-A", "235/45R19", true);

    treadfit()
        .current_dir(tmp.path())
        .args(["--format", "csv", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sku,title,brand"))
        .stdout(predicate::str::contains("TIRE-A"));
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_show_by_sku_case_insensitive() {
    let tmp = setup_test_project();
    write_record(
        &tmp,
        "a.md",
        "sku: TIRE-A\nbrand: Michelin\nmodel: Pilot Sport 4S\nsize: 235/45ZR19 95W\nprice: 289.99",
    );

    treadfit()
        .current_dir(tmp.path())
        .args(["show", "tire-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TIRE-A"))
        .stdout(predicate::str::contains("235/45R19"))
        .stdout(predicate::str::contains("in stock"));
}

#[test]
fn test_show_unknown_sku_fails() {
    let tmp = setup_test_project();

    treadfit()
        .current_dir(tmp.path())
        .args(["show", "TIRE-NOPE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No record found"));
}

#[test]
fn test_show_yaml_round_trips_front_matter() {
    let tmp = setup_test_project();
    write_simple_record(&tmp, "TIRE-A", "235/45R19", true);

    treadfit()
        .current_dir(tmp.path())
        .args(["--format", "yaml", "show", "TIRE-A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sku: TIRE-A"))
        .stdout(predicate::str::contains("sizeNorm: 235/45R19"));
}

// ============================================================================
// New Command Tests
// ============================================================================

#[test]
fn test_new_creates_record_file() {
    let tmp = setup_test_project();

    treadfit()
        .current_dir(tmp.path())
        .args([
            "new",
            "--sku",
            "TIRE-TEST1",
            "--brand",
            "Michelin",
            "--model",
            "Pilot Sport 4S",
            "--size",
            "235/45ZR19 95W",
            "--price",
            "289.99",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created record"))
        .stdout(predicate::str::contains("235/45R19"));

    let content = fs::read_to_string(tmp.path().join("tires/tire-test1.md")).unwrap();
    assert!(content.starts_with("---\n"));
    assert!(content.contains("sku: TIRE-TEST1"));
    assert!(content.contains("brand: Michelin"));
    // derived fields are not persisted
    assert!(!content.contains("sizeNorm"));
    assert!(!content.contains("url:"));
}

#[test]
fn test_new_generates_sku_when_omitted() {
    let tmp = setup_test_project();

    let sku = create_test_record(&tmp, "Continental", "PremiumContact 7", "225/55R18");
    assert!(sku.starts_with("TIRE-"));

    treadfit()
        .current_dir(tmp.path())
        .args(["show", &sku])
        .assert()
        .success()
        .stdout(predicate::str::contains("PremiumContact 7"));
}

#[test]
fn test_new_warns_on_unparseable_size() {
    let tmp = setup_test_project();

    treadfit()
        .current_dir(tmp.path())
        .args([
            "new",
            "--sku",
            "TIRE-ODD",
            "--brand",
            "Odd",
            "--model",
            "Ball",
            "--size",
            "call for sizing",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("does not normalize"));
}

#[test]
fn test_new_out_of_stock_flag() {
    let tmp = setup_test_project();

    treadfit()
        .current_dir(tmp.path())
        .args([
            "new",
            "--sku",
            "TIRE-OOS",
            "--brand",
            "B",
            "--model",
            "M",
            "--size",
            "225/55R18",
            "--out-of-stock",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(tmp.path().join("tires/tire-oos.md")).unwrap();
    assert!(content.contains("inStock: false"));
}

#[test]
fn test_new_refuses_duplicate_file() {
    let tmp = setup_test_project();
    write_simple_record(&tmp, "TIRE-A", "235/45R19", true);

    treadfit()
        .current_dir(tmp.path())
        .args([
            "new", "--sku", "TIRE-A", "--brand", "B", "--model", "M", "--size", "225/55R18",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
