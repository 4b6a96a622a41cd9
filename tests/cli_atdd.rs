#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FULL_LEAD: &str = r#"{
  "name": "Jane Doe",
  "email": "jane@x.com",
  "phone": "5551234567",
  "qualification": { "isHomeowner": true, "creditScore": "good" },
  "billData": { "source": "utility_bill", "monthlyUsageKwh": 900, "provider": "TXU" },
  "systemDesign": {
    "recommendedPanelCount": 24,
    "systemSizeKw": 9.6,
    "annualProductionKwh": 13800,
    "estimatedCost": 28800,
    "estimatedAnnualSavings": 1900,
    "paybackYears": 15
  },
  "tracking": { "source": "organic" }
}"#;

/// Runs the binary from `dir` with an isolated HOME so no global config leaks in.
fn leadscore_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("leadscore").expect("binary should compile");
    cmd.current_dir(dir).env("HOME", dir).env_remove("RUST_LOG");
    cmd
}

fn write_batch(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("leads.json");
    fs::write(
        &path,
        format!(r#"[{FULL_LEAD}, {{ "email": "sam@x.com" }}, {{}}]"#),
    )
    .expect("batch should write");
    path
}

#[test]
fn score_prints_markdown_breakdown_by_default() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("lead.json"), FULL_LEAD).expect("lead should write");

    leadscore_in(dir.path())
        .arg("score")
        .arg("lead.json")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Total score: 72 (Warm)"))
        .stdout(predicate::str::contains("| Qualification | 65 | 20% |"))
        .stdout(predicate::str::contains("Provider: TXU"));
}

#[test]
fn score_json_outputs_total_and_tier() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("lead.json"), FULL_LEAD).expect("lead should write");

    leadscore_in(dir.path())
        .args(["score", "lead.json", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"totalScore\": 72"))
        .stdout(predicate::str::contains("\"tier\": \"warm\""));
}

#[test]
fn score_unwraps_data_envelope() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("lead.json"),
        format!(r#"{{ "data": {FULL_LEAD}, "source": "python_connector" }}"#),
    )
    .expect("lead should write");

    leadscore_in(dir.path())
        .args(["score", "lead.json", "-f", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"totalScore\": 72"));
}

#[test]
fn score_missing_file_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");

    leadscore_in(dir.path())
        .args(["score", "missing.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input not found"));
}

#[test]
fn score_rejects_batch_files() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_batch(dir.path());

    leadscore_in(dir.path())
        .args(["score", "leads.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("expected a single lead, found 3"));
}

#[test]
fn report_json_summarizes_batch() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_batch(dir.path());

    leadscore_in(dir.path())
        .args(["report", "leads.json", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"total\": 3"))
        .stdout(predicate::str::contains("\"avgScore\": 27"));
}

#[test]
fn report_markdown_lists_rankings() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_batch(dir.path());

    leadscore_in(dir.path())
        .args(["report", "leads.json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Lead Score Report"))
        .stdout(predicate::str::contains("| 1 | Jane Doe | 72 | Warm |"))
        .stdout(predicate::str::contains("- Warm: 1"));
}

#[test]
fn report_directory_warns_about_unreadable_documents() {
    let dir = TempDir::new().expect("temp dir should be created");
    let docs = dir.path().join("leads");
    fs::create_dir_all(&docs).expect("docs dir should create");
    fs::write(docs.join("a.json"), FULL_LEAD).expect("a should write");
    fs::write(docs.join("b.json"), "{ broken").expect("b should write");

    leadscore_in(dir.path())
        .args(["report", "leads", "-f", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"total\": 1"))
        .stderr(predicate::str::contains("skipped 1 unreadable document(s)"));
}

#[test]
fn report_export_writes_snapshot() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_batch(dir.path());

    leadscore_in(dir.path())
        .args(["report", "leads.json", "--export"])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("snapshot:"));

    let reports = dir.path().join(".leadscore/reports");
    let entries = fs::read_dir(reports)
        .expect("reports directory should exist")
        .collect::<std::result::Result<Vec<_>, _>>()
        .expect("report entries should be readable");
    assert_eq!(entries.len(), 1);

    let snapshot = fs::read_to_string(entries[0].path()).expect("snapshot should read");
    assert!(snapshot.contains("\"inputSha256\""));
    assert!(snapshot.contains("\"generatedAt\""));
}

#[test]
fn config_max_records_truncates_with_warning() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_batch(dir.path());
    fs::write(
        dir.path().join("leadscore.toml"),
        r#"
[input]
max_records = 2

[report]
format = "json"
"#,
    )
    .expect("config should write");

    leadscore_in(dir.path())
        .args(["report", "leads.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"total\": 2"))
        .stderr(predicate::str::contains("scoring first 2 of 3 leads"));
}

#[test]
fn truncated_export_records_how_many_leads_were_read() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_batch(dir.path());
    fs::write(dir.path().join("leadscore.toml"), "[input]\nmax_records = 2\n")
        .expect("config should write");

    leadscore_in(dir.path())
        .args(["report", "leads.json", "--export"])
        .assert()
        .code(1);

    let reports = dir.path().join(".leadscore/reports");
    let entries = fs::read_dir(reports)
        .expect("reports directory should exist")
        .collect::<std::result::Result<Vec<_>, _>>()
        .expect("report entries should be readable");
    let snapshot = fs::read_to_string(entries[0].path()).expect("snapshot should read");
    assert!(snapshot.contains("\"recordsRead\": 3"));
    assert!(snapshot.contains("\"total\": 2"));
}

#[test]
fn invalid_config_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_batch(dir.path());
    fs::write(
        dir.path().join("leadscore.toml"),
        "[report]\nformat = \"sarif\"\n",
    )
    .expect("config should write");

    leadscore_in(dir.path())
        .args(["report", "leads.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unsupported report.format"));
}

#[test]
fn explicit_config_flag_must_exist() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_batch(dir.path());

    leadscore_in(dir.path())
        .args(["--config", "ci.toml", "report", "leads.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}
