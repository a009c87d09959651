use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn workbrand(root: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("workbrand").expect("binary should compile");
    cmd.env("HOME", root.path())
        .env_remove("OPENAI_API_KEY")
        .env_remove("RUST_LOG")
        .arg("--root")
        .arg(root.path());
    cmd
}

#[test]
fn compare_benchmarks_without_api_key() {
    let root = TempDir::new().expect("temp dir should be created");
    workbrand(&root)
        .args(["compare", "Google", "--competitor", "walmart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Employer Brand: Google vs Walmart"))
        .stdout(predicate::str::contains("| Google | 95/100 | A |"));
}

#[test]
fn compare_json_uses_dashboard_shape() {
    let root = TempDir::new().expect("temp dir should be created");
    let output = workbrand(&root)
        .args(["compare", "workbrand", "--competitor", "L'Oreal", "--format", "json"])
        .output()
        .expect("compare should run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["competitorName"], "L'Oreal");
    assert!(value["userCompany"].is_object());
    assert!(value["competitor"]["top3Words"].is_array());
}

#[test]
fn compare_unknown_company_without_key_fails_with_hint() {
    let root = TempDir::new().expect("temp dir should be created");
    workbrand(&root)
        .args(["compare", "Initech", "--competitor", "google"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn compare_uses_stored_company() {
    let root = TempDir::new().expect("temp dir should be created");
    workbrand(&root)
        .args(["companies", "add", "Initech", "--email", "bill@initech.com"])
        .assert()
        .success();

    workbrand(&root)
        .args(["compare", "initech", "--competitor", "hubspot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded from saved analysis"));
}

#[test]
fn show_unknown_company_is_not_found() {
    let root = TempDir::new().expect("temp dir should be created");
    workbrand(&root)
        .args(["show", "Initech"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn companies_add_list_delete_round_trip() {
    let root = TempDir::new().expect("temp dir should be created");
    workbrand(&root)
        .args(["companies", "add", "  Globex Corp "])
        .assert()
        .success()
        .stdout(predicate::str::contains("added globex corp"));

    let stored = fs::read_to_string(root.path().join(".workbrand/company-data.json"))
        .expect("company database should exist");
    assert!(stored.contains("\"globex corp\""));

    workbrand(&root)
        .args(["companies", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("globex corp\t0\t-"));

    workbrand(&root)
        .args(["companies", "add", "GLOBEX CORP"])
        .assert()
        .code(2);

    workbrand(&root)
        .args(["companies", "delete", "Globex Corp"])
        .assert()
        .success();

    workbrand(&root)
        .args(["companies", "delete", "Globex Corp"])
        .assert()
        .code(2);
}

#[test]
fn benchmark_listing_comes_from_catalog() {
    let root = TempDir::new().expect("temp dir should be created");
    workbrand(&root)
        .args(["companies", "list", "--benchmarks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("google\tGoogle\t95"))
        .stdout(predicate::str::contains("mastercard"))
        .stdout(predicate::str::contains("Workbrand Global").not());
}

#[test]
fn users_directory_is_seeded_and_mutable() {
    let root = TempDir::new().expect("temp dir should be created");
    workbrand(&root)
        .args(["users", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total: 6"))
        .stdout(predicate::str::contains("active: 5"))
        .stdout(predicate::str::contains("admins: 2"));

    workbrand(&root)
        .args([
            "users",
            "add",
            "--name",
            "Peter Gibbons",
            "--email",
            "peter@initech.com",
            "--company",
            "Initech",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("7\tPeter Gibbons"));

    workbrand(&root)
        .args(["users", "toggle-status", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inactive"));

    workbrand(&root)
        .args(["users", "get", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"companyId\": \"initech\""))
        .stdout(predicate::str::contains("\"status\": \"inactive\""));

    workbrand(&root)
        .args(["users", "get", "42"])
        .assert()
        .code(2);

    workbrand(&root)
        .args(["users", "delete", "42"])
        .assert()
        .code(2);
}

#[test]
fn calendar_lists_quarters_from_reference_date() {
    let root = TempDir::new().expect("temp dir should be created");
    workbrand(&root)
        .args(["calendar", "--today", "2026-10-19", "--count", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Q4 2026\t2026-10-01\tOctober 2026, November 2026, December 2026",
        ))
        .stdout(predicate::str::contains("Q1 2027\t2027-01-01"));
}

#[test]
fn calendar_honours_configured_fiscal_year() {
    let root = TempDir::new().expect("temp dir should be created");
    fs::write(
        root.path().join("workbrand.toml"),
        "[calendar]\nfiscal_year_start = 4\n",
    )
    .expect("config should write");

    workbrand(&root)
        .args(["calendar", "--today", "2026-02-10", "--count", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Q4 2025\t2026-01-01"));
}
