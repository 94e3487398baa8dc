// Integration tests for the scoregauge CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes, stdout/stderr output, and side effects.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the scoregauge binary.
fn scoregauge() -> Command {
    Command::cargo_bin("scoregauge").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    scoregauge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("scoregauge"));
}

#[test]
fn cli_help_flag() {
    scoregauge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score gauge rendering"));
}

#[test]
fn render_requires_path() {
    scoregauge()
        .args(["render", "--score", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn render_requires_score() {
    scoregauge()
        .args(["render", "/tmp/results.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn render_rejects_out_combined_with_in_place() {
    scoregauge()
        .args([
            "render",
            "/tmp/results.html",
            "--score",
            "50",
            "--out",
            "/tmp/out.html",
            "--in-place",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn spec_prints_doughnut_configuration() {
    scoregauge()
        .args(["spec", "--score", "64"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"doughnut\""))
        .stdout(predicate::str::contains("\"maintainAspectRatio\": false"));
}

#[test]
fn tier_reports_boundary_tiers() {
    scoregauge()
        .args(["tier", "--score", "39"])
        .assert()
        .success()
        .stdout(predicate::str::contains("poor #e74c3c"));

    scoregauge()
        .args(["tier", "--score", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("medium #f1c40f"));

    scoregauge()
        .args(["tier", "--score", "70"])
        .assert()
        .success()
        .stdout(predicate::str::contains("good #2ecc71"));
}

#[test]
fn add_field_is_a_silent_no_op() {
    scoregauge()
        .arg("add-field")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
