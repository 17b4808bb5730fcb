//! Integration tests for the spotcheck CLI
//!
//! Tests the CLI subcommands: demo, slice, range

use std::process::Command;

/// Helper to run spotcheck and capture output
fn run_spotcheck(args: &[&str]) -> (String, String, i32) {
    // Try release binary first, fall back to debug
    let binary = if std::path::Path::new("./target/release/spotcheck").exists() {
        "./target/release/spotcheck"
    } else {
        "./target/debug/spotcheck"
    };

    let output = Command::new(binary)
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("Failed to execute spotcheck");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

// ============================================================================
// spotcheck demo tests
// ============================================================================

#[test]
fn test_demo_runs_all_scenarios() {
    let (stdout, _, code) = run_spotcheck(&["demo"]);
    assert_eq!(code, 0, "demo should succeed when every assertion passes");

    assert!(stdout.contains("Running test: Addition Test"));
    assert!(stdout.contains("Running test: Even Number Test"));
    assert!(stdout.contains("Running test: String Equality Test"));
    assert!(stdout.contains("Assertion passed: add(2, 3) == 5"));
}

#[test]
fn test_demo_shows_slice_and_range_output() {
    let (stdout, _, code) = run_spotcheck(&["demo"]);
    assert_eq!(code, 0);

    assert!(stdout.contains("Sliced Array: 20 30 40"));
    assert!(stdout.contains("Range-based Loop: 0 2 4 6 8"));
}

#[test]
fn test_demo_json_summary() {
    let (stdout, _, code) = run_spotcheck(&["demo", "--json"]);
    assert_eq!(code, 0);

    // The summary is the last JSON object on stdout
    let json_start = stdout.find('{').expect("demo --json should print JSON");
    let json: serde_json::Value =
        serde_json::from_str(&stdout[json_start..]).expect("summary should be valid JSON");

    assert_eq!(json["failed"].as_i64().unwrap(), 0);
    assert!(json["passed"].as_i64().unwrap() >= 5);
}

// ============================================================================
// spotcheck slice tests
// ============================================================================

#[test]
fn test_slice_interior_window() {
    let (stdout, _, code) = run_spotcheck(&["slice", "10,20,30,40,50", "1", "4"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "20 30 40");
}

#[test]
fn test_slice_invalid_range_fails() {
    let (_, stderr, code) = run_spotcheck(&["slice", "10,20,30,40,50", "4", "2"]);
    assert_ne!(code, 0, "inverted range should fail");
    assert!(stderr.contains("out of range"));
}

#[test]
fn test_slice_rejects_non_integer_values() {
    let (_, stderr, code) = run_spotcheck(&["slice", "10,twenty,30", "0", "2"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid integer"));
}

// ============================================================================
// spotcheck range tests
// ============================================================================

#[test]
fn test_range_forward() {
    let (stdout, _, code) = run_spotcheck(&["range", "0", "10", "2"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "0 2 4 6 8");
}

#[test]
fn test_range_negative_step() {
    let (stdout, _, code) = run_spotcheck(&["range", "5", "0", "--", "-2"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "5 3 1");
}

#[test]
fn test_range_zero_step_fails() {
    let (_, stderr, code) = run_spotcheck(&["range", "0", "10", "0"]);
    assert_ne!(code, 0, "zero step should be rejected");
    assert!(stderr.contains("nonzero"));
}
