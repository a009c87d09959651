// Integration tests for the workbrand CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes, stdout/stderr output, and side effects.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Binary isolated from the caller's config, data and API key.
fn workbrand(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("workbrand").expect("binary should exist");
    cmd.env("HOME", home.path())
        .env_remove("OPENAI_API_KEY")
        .env_remove("RUST_LOG")
        .arg("--root")
        .arg(home.path());
    cmd
}

#[test]
fn cli_version_flag() {
    Command::cargo_bin("workbrand")
        .expect("binary should exist")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("workbrand"));
}

#[test]
fn cli_help_flag() {
    Command::cargo_bin("workbrand")
        .expect("binary should exist")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Employer brand"));
}

#[test]
fn compare_requires_competitor() {
    let home = TempDir::new().expect("temp dir should be created");
    workbrand(&home)
        .args(["compare", "google"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn normalize_caps_perfect_scores() {
    let home = TempDir::new().expect("temp dir should be created");
    let input = home.path().join("reply.txt");
    fs::write(
        &input,
        r#"Sure! Here is the analysis:
        {"interpersonalFit": 20, "thrivingAtWork": 20, "experienceAndCompetency": 20,
         "recognitionAndCompensation": 20, "purposeAndInvolvement": 20}"#,
    )
    .expect("input should write");

    let output = workbrand(&home)
        .arg("normalize")
        .arg(&input)
        .output()
        .expect("normalize should run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    for key in [
        "interpersonalFit",
        "thrivingAtWork",
        "experienceAndCompetency",
        "recognitionAndCompensation",
        "purposeAndInvolvement",
    ] {
        assert_eq!(value[key], 17, "{key}");
    }
}

#[test]
fn normalize_reads_stdin() {
    let home = TempDir::new().expect("temp dir should be created");
    workbrand(&home)
        .args(["normalize", "--company", "Initech"])
        .write_stdin(r#"{"interpersonalFit": 10}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"interpersonalFit\": 10"))
        .stdout(predicate::str::contains("Initech"));
}

#[test]
fn normalize_without_json_is_runtime_failure() {
    let home = TempDir::new().expect("temp dir should be created");
    workbrand(&home)
        .arg("normalize")
        .write_stdin("I cannot help with that.")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("could not parse"));
}

#[test]
fn invalid_config_is_runtime_failure() {
    let home = TempDir::new().expect("temp dir should be created");
    fs::write(
        home.path().join("workbrand.toml"),
        "[calendar]\nfiscal_year_start = 13\n",
    )
    .expect("config should write");

    workbrand(&home)
        .arg("calendar")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("fiscal_year_start"));
}
