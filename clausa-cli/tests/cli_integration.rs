//! Integration tests for the clausa CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn clausa() -> Command {
    Command::cargo_bin("clausa").unwrap()
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_process_json_envelope() {
    let value = json_stdout(
        clausa()
            .arg("process")
            .arg("-i")
            .arg(fixture_path("lease.txt")),
    );

    assert_eq!(value["status"], "success");
    assert_eq!(value["source"], fixture_path("lease.txt"));
    assert_eq!(value["total_clauses"], 6);

    let clauses = value["clauses"].as_array().unwrap();
    let titles: Vec<_> = clauses.iter().map(|c| c["title"].as_str().unwrap()).collect();
    assert_eq!(
        titles,
        vec![
            "COMMERCIAL LEASE AGREEMENT",
            "1. DEFINITIONS",
            "2. RENT AND SECURITY DEPOSIT",
            "1. The Tenant shall pay rent of two thousand dollars on the first day of each mo",
            "Tenant's Insurance",
            "3. GOVERNING LAW",
        ]
    );

    let ids: Vec<_> = clauses.iter().map(|c| c["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    assert_eq!(clauses[1]["clause_type"], "definitions");
    assert_eq!(clauses[3]["clause_type"], "payment");
    assert_eq!(clauses[4]["clause_type"], "insurance");
    assert_eq!(clauses[5]["clause_type"], "governing_law");
}

#[test]
fn test_text_output() {
    clausa()
        .arg("process")
        .arg("-i")
        .arg(fixture_path("lease.txt"))
        .arg("-f")
        .arg("text")
        .assert()
        .success()
        .stdout(predicate::str::contains("== tests/fixtures/lease.txt =="))
        .stdout(predicate::str::contains("[5] Tenant's Insurance (insurance)"))
        .stdout(predicate::str::contains(
            "3. GOVERNING LAW This Lease is governed by the laws of the Province of Ontario.",
        ));
}

#[test]
fn test_markdown_output() {
    clausa()
        .arg("process")
        .arg("-i")
        .arg(fixture_path("lease.txt"))
        .arg("-f")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("### 2. 1. DEFINITIONS"))
        .stdout(predicate::str::contains("*Type: definitions*"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total clauses: 6*"));
}

#[test]
fn test_no_classify_omits_labels() {
    let value = json_stdout(
        clausa()
            .arg("process")
            .arg("-i")
            .arg(fixture_path("lease.txt"))
            .arg("--no-classify"),
    );

    let clauses = value["clauses"].as_array().unwrap();
    assert_eq!(clauses.len(), 6);
    assert!(clauses.iter().all(|c| c.get("clause_type").is_none()));
}

#[test]
fn test_custom_rules() {
    let value = json_stdout(
        clausa()
            .arg("process")
            .arg("-i")
            .arg(fixture_path("lease.txt"))
            .arg("--rules")
            .arg(fixture_path("rules.toml")),
    );

    let clauses = value["clauses"].as_array().unwrap();
    assert_eq!(clauses[0]["clause_type"], "other");
    assert_eq!(clauses[3]["clause_type"], "money");
    assert_eq!(clauses[4]["clause_type"], "cover");
}

#[test]
fn test_config_file_sets_defaults() {
    clausa()
        .arg("process")
        .arg("-i")
        .arg(fixture_path("lease.txt"))
        .arg("-c")
        .arg(fixture_path("config.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] COMMERCIAL LEASE AGREEMENT\n"))
        .stdout(predicate::str::contains("(general)").not());
}

#[test]
fn test_stdin_input() {
    let value = json_stdout(
        clausa()
            .arg("process")
            .arg("-i")
            .arg("-")
            .write_stdin("14. INSURANCE AND LIABILITY\r\nThe tenant shall maintain coverage.\r\n"),
    );

    assert_eq!(value["source"], "<stdin>");
    assert_eq!(value["total_clauses"], 1);
    assert_eq!(
        value["clauses"][0]["text"],
        "14. INSURANCE AND LIABILITY The tenant shall maintain coverage."
    );
}

#[test]
fn test_empty_document_reports_error_envelope() {
    let value = json_stdout(
        clausa()
            .arg("process")
            .arg("-i")
            .arg(fixture_path("empty.txt")),
    );

    assert_eq!(value["status"], "error");
    assert_eq!(value["message"], "no text received");
}

#[test]
fn test_multiple_documents_give_array() {
    let value = json_stdout(
        clausa()
            .arg("process")
            .arg("-q")
            .arg("-i")
            .arg(fixture_path("lease.txt"))
            .arg("-i")
            .arg(fixture_path("empty.txt")),
    );

    let documents = value.as_array().unwrap();
    assert_eq!(documents.len(), 2);
    // sources are sorted by path
    assert_eq!(documents[0]["status"], "error");
    assert_eq!(documents[1]["status"], "success");
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("clauses.json");

    clausa()
        .arg("process")
        .arg("-i")
        .arg(fixture_path("lease.txt"))
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let value: Value = serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(value["total_clauses"], 6);
}

#[test]
fn test_glob_pattern() {
    let temp_dir = TempDir::new().unwrap();
    for (name, heading) in [("a.txt", "1. PAYMENT TERMS"), ("b.txt", "2. TERMINATION")] {
        fs::write(
            temp_dir.path().join(name),
            format!("{heading}\nEither party may end this agreement on notice."),
        )
        .unwrap();
    }

    let pattern = temp_dir.path().join("*.txt");
    let value = json_stdout(
        clausa()
            .arg("process")
            .arg("-q")
            .arg("-i")
            .arg(pattern.to_str().unwrap())
            .arg("--no-classify"),
    );

    let documents = value.as_array().unwrap();
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0]["clauses"][0]["title"], "1. PAYMENT TERMS");
    assert_eq!(documents[1]["clauses"][0]["title"], "2. TERMINATION");
}

#[test]
fn test_missing_file() {
    clausa()
        .arg("process")
        .arg("-i")
        .arg("nonexistent-lease.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No files found matching the provided patterns",
        ));
}

#[test]
fn test_invalid_rules_fail_processing() {
    clausa()
        .arg("process")
        .arg("-i")
        .arg(fixture_path("lease.txt"))
        .arg("--rules")
        .arg(fixture_path("invalid_rules.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no keywords"));
}

#[test]
fn test_inspect() {
    clausa()
        .arg("inspect")
        .arg("-i")
        .arg(fixture_path("lease.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("major-heading"))
        .stdout(predicate::str::contains("inline-heading-body"))
        .stdout(predicate::str::contains("numbered-item"))
        .stdout(predicate::str::contains(" H  COMMERCIAL LEASE AGREEMENT"));
}

#[test]
fn test_list_labels() {
    clausa()
        .arg("list")
        .arg("labels")
        .assert()
        .success()
        .stdout(predicate::str::contains("governing_law"))
        .stdout(predicate::str::contains("general"));
}

#[test]
fn test_list_labels_from_rules() {
    clausa()
        .arg("list")
        .arg("labels")
        .arg("--rules")
        .arg(fixture_path("rules.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("money"))
        .stdout(predicate::str::contains("governing_law").not());
}

#[test]
fn test_list_formats() {
    clausa()
        .arg("list")
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_validate() {
    clausa()
        .arg("validate")
        .arg("--rules")
        .arg(fixture_path("rules.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Rule file is valid!"));

    clausa()
        .arg("validate")
        .arg("--rules")
        .arg(fixture_path("invalid_rules.toml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Rule file is invalid!"));
}

#[test]
fn test_generate_config_then_validate() {
    let temp_dir = TempDir::new().unwrap();
    let rules_path = temp_dir.path().join("rules.toml");

    clausa()
        .arg("generate-config")
        .arg("-o")
        .arg(&rules_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rule template generated"));

    clausa()
        .arg("validate")
        .arg("--rules")
        .arg(&rules_path)
        .assert()
        .success();
}

#[test]
fn test_help() {
    clausa()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clause segmentation"));
}
