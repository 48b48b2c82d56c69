//! Integration tests for the hazardwise binary
//!
//! Tests cover:
//! - Risk assessment output and exit codes
//! - Recording hazards, impacts and mitigations
//! - Report export
//! - Shell completions

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hazardwise"))
        .args(args)
        .env("HAZARDWISE_CONFIG_DIR", config_dir)
        .env("NO_COLOR", "1")
        .env_remove("HAZARDWISE_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ============================================================================
// Assessment
// ============================================================================

#[test]
fn test_assess_prints_score_and_rating() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["assess", "--likelihood", "4", "--severity", "4"]);

    assert!(output.status.success(), "Command should succeed");
    let text = stdout(&output);
    assert!(text.contains("Score: 4"));
    assert!(text.contains("Unacceptable Without Further Mitigation"));
}

#[test]
fn test_assess_json() {
    let dir = TempDir::new().unwrap();
    let output = run(
        dir.path(),
        &["assess", "-l", "5", "-s", "5", "--format", "json"],
    );

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["score"], 5);
    assert_eq!(value["rating"], "Unacceptable");
    assert_eq!(value["definition"], "Unacceptable level of risk.");
}

#[test]
fn test_assess_out_of_range_is_validation_error() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["assess", "--likelihood", "0", "--severity", "3"]);

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("likelihood"));
}

#[test]
fn test_assess_fractional_level_is_validation_error() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["assess", "--likelihood", "2.5", "--severity", "2"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_assess_label() {
    let dir = TempDir::new().unwrap();
    let output = run(
        dir.path(),
        &["assess-label", "--severity", "Catastrophic", "--likelihood", "Almost Certain"],
    );
    assert!(output.status.success());
    assert!(stdout(&output).contains("Score: 5"));
}

#[test]
fn test_assess_label_missing_gives_no_result() {
    let dir = TempDir::new().unwrap();
    let output = run(
        dir.path(),
        &["assess-label", "--severity", "Major", "--format", "json"],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "null");
}

#[test]
fn test_matrix_prints_all_rows() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["matrix"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Almost Certain"));
    assert!(text.contains("Catastrophic"));
    assert_eq!(text.lines().count(), 6);
}

// ============================================================================
// Hazard log
// ============================================================================

#[test]
fn test_hazard_add_and_list() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["hazard", "add", "Delayed sepsis alert"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Created hazard 1"));

    let output = run(
        dir.path(),
        &[
            "impact",
            "add",
            "1",
            "Patient deteriorates",
            "--severity",
            "Major",
            "--likelihood",
            "Likely",
        ],
    );
    assert!(output.status.success());

    let output = run(dir.path(), &["hazard", "list", "--format", "json"]);
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(rows[0]["id"], "1");
    assert_eq!(rows[0]["description"], "Delayed sepsis alert");
    assert_eq!(rows[0]["impacts"], 1);
    assert_eq!(rows[0]["score"], 4);

    assert!(dir.path().join("project.json").exists());
}

#[test]
fn test_hazard_add_blank_description_fails() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["hazard", "add", "   "]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_unknown_hazard_is_not_found() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["cause", "add", "42", "Network outage"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_mitigation_requires_target() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["mitigation", "add", "Train staff"]);
    assert!(!output.status.success());
}

#[test]
fn test_clear_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), &["hazard", "add", "Wrong patient record"]);

    let output = run(dir.path(), &["clear"]);
    assert_eq!(output.status.code(), Some(4));

    let output = run(dir.path(), &["clear", "--yes"]);
    assert!(output.status.success());

    let output = run(dir.path(), &["hazard", "list"]);
    assert!(stdout(&output).contains("No hazards recorded."));
}

// ============================================================================
// Report
// ============================================================================

#[test]
fn test_report_writes_docx() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), &["project", "set", "--title", "Sepsis alerting"]);
    run(dir.path(), &["hazard", "add", "Alert not shown"]);
    run(
        dir.path(),
        &["mitigation", "add", "--hazard", "1", "Daily alert audit"],
    );

    let out = dir.path().join("case.docx");
    let output = run(
        dir.path(),
        &["report", "--output", out.to_str().unwrap()],
    );
    assert!(output.status.success(), "Command should succeed");

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"PK\x03\x04"));
    assert!(bytes.windows(17).any(|w| w == b"word/document.xml"));
}

#[test]
fn test_report_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("missing").join("case.docx");
    let output = run(
        dir.path(),
        &["report", "--output", out.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(!out.exists());
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["completions", "bash"]);

    assert!(output.status.success(), "Command should succeed");
    let text = stdout(&output);
    assert!(
        text.contains("complete") || text.contains("_hazardwise"),
        "Should generate bash completion script"
    );
}

#[test]
fn test_completions_invalid_shell() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["completions", "tcsh"]);
    assert!(!output.status.success());
}
