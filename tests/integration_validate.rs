//! End-to-end tests for `stackgen validate`.

mod common;

use common::TestSite;
use predicates::prelude::*;

#[test]
fn test_validate_valid_site() {
    let site = TestSite::new();

    let output = site.run(&["validate"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("products.json — 1 record(s)"));
    assert!(stdout.contains("All data valid."));
}

#[test]
fn test_validate_reports_every_error_at_once() {
    let site = TestSite::new();
    site.write_data(
        "products.json",
        r#"[
  { "id": "mice-a", "category": "mice", "affiliate": "http://insecure", "pros": [], "priceRaw": -1 },
  { "id": "mice-a", "category": "chairs" }
]"#,
    );

    let output = site.run(&["validate"]);
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    // one run reports problems from both records
    assert!(stdout.contains("products[0] (mice-a): affiliate link must start with https://"));
    assert!(stdout.contains("products[0] (mice-a): pros must be a non-empty array"));
    assert!(stdout.contains("products[0] (mice-a): priceRaw must be a positive number"));
    assert!(stdout.contains("products[1] (mice-a): duplicate id \"mice-a\""));
    assert!(stdout.contains("products[1] (mice-a): id must start with category prefix \"chairs-\""));
    // cross-file check: the collection now references an id that exists,
    // but the second record corrupted the catalogue, not the reference
    assert!(stdout.contains("validation error"));
}

#[test]
fn test_validate_reports_unknown_collection_reference() {
    let site = TestSite::new();
    site.write_data(
        "collections.json",
        r##"[ { "id": "all-picks", "label": "All", "emoji": "🏴", "color": "#fff", "baseProducts": ["mice-ghost"] } ]"##,
    );

    let output = site.run(&["validate"]);
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("baseProducts references unknown product id \"mice-ghost\""));
}

#[test]
fn test_validate_missing_file() {
    let site = TestSite::new();
    std::fs::remove_file(site.data_dir().join("guides.json")).unwrap();

    let output = site.run(&["validate"]);
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Missing file: guides.json"));
}

#[test]
fn test_validate_invalid_json() {
    let site = TestSite::new();
    site.write_data("comparisons.json", "[{ not json");

    let output = site.run(&["validate"]);
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Invalid JSON in comparisons.json"));
}

#[test]
fn test_validate_strict_promotes_warnings() {
    let site = TestSite::new();
    std::fs::remove_file(site.data_dir().join("categories.json")).unwrap();

    // permissive: missing categories.json is only a warning
    assert!(site.run(&["validate"]).status.success());

    // strict: the warning fails the run
    let output = site.run(&["validate", "--strict"]);
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("categories.json not found"));
}

#[test]
fn test_validate_json_format() {
    let site = TestSite::new();

    let output = site.run(&["validate", "--format", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON output");
    assert_eq!(parsed["valid"], serde_json::json!(true));
    assert_eq!(parsed["errors"], serde_json::json!([]));
    assert_eq!(parsed["counts"]["products.json"], serde_json::json!(1));
}

#[test]
fn test_validate_json_format_with_errors() {
    let site = TestSite::new();
    std::fs::remove_file(site.data_dir().join("products.json")).unwrap();

    let output = site.run(&["validate", "--format", "json"]);
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON output");
    assert_eq!(parsed["valid"], serde_json::json!(false));
    let errors = parsed["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e == "Missing file: products.json"));
}

#[test]
fn test_help_mentions_commands() {
    let mut cmd = assert_cmd::Command::cargo_bin("stackgen").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("generate"));
}
