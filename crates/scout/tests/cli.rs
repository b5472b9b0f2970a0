// ABOUTME: Integration tests for the scout CLI binary.
// ABOUTME: Tests profile, message, and prompt modes over saved HTML snapshots.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const PROFILE_URL: &str = "https://www.linkedin.com/in/jane-doe";

fn scout_cmd() -> Command {
    Command::cargo_bin("scout").unwrap()
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/html/{}.html", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn profile_mode_prints_record_json() {
    let output = scout_cmd()
        .arg("--html")
        .arg(fixture("current_layout"))
        .arg("--url")
        .arg(PROFILE_URL)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["name"], "Jane Doe");
    assert_eq!(value["url"], PROFILE_URL);
    assert_eq!(value["experience"].as_array().unwrap().len(), 3);
}

#[test]
fn non_profile_url_fails() {
    scout_cmd()
        .arg("--html")
        .arg(fixture("current_layout"))
        .arg("--url")
        .arg("https://www.linkedin.com/feed/")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a profile page"));
}

#[test]
fn message_mode_prints_not_profile_payload() {
    scout_cmd()
        .arg("--html")
        .arg(fixture("current_layout"))
        .arg("--url")
        .arg("https://www.linkedin.com/jobs/")
        .arg("--mode")
        .arg("message")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"notProfilePage\": true"));
}

#[test]
fn message_mode_prints_profile_payload() {
    scout_cmd()
        .arg("--html")
        .arg(fixture("legacy_layout"))
        .arg("--url")
        .arg(PROFILE_URL)
        .arg("--mode")
        .arg("message")
        .assert()
        .success()
        .stdout(predicate::str::contains("Head of Data at Initech"))
        .stdout(predicate::str::contains("\"error\"").not());
}

#[test]
fn prompt_mode_lists_experience() {
    scout_cmd()
        .arg("--html")
        .arg(fixture("legacy_layout"))
        .arg("--url")
        .arg(PROFILE_URL)
        .arg("--mode")
        .arg("prompt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Headline: Head of Data at Initech"))
        .stdout(predicate::str::contains("Experience:\n1. Head of Data\n2. Analytics Manager"));
}

#[test]
fn unknown_mode_fails() {
    scout_cmd()
        .arg("--html")
        .arg(fixture("current_layout"))
        .arg("--url")
        .arg(PROFILE_URL)
        .arg("--mode")
        .arg("yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown mode"));
}

#[test]
fn missing_url_is_rejected() {
    scout_cmd()
        .arg("--html")
        .arg(fixture("current_layout"))
        .assert()
        .failure();
}

#[test]
fn output_file_receives_json() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("profile.json");

    scout_cmd()
        .arg("--html")
        .arg(fixture("current_layout"))
        .arg("--url")
        .arg(PROFILE_URL)
        .arg("-o")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out_path).unwrap();
    assert!(written.contains("Staff Software Engineer at Example Corp"));
}

#[test]
fn custom_selector_registry_overrides_builtin() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("page.html");
    let selectors_path = temp_dir.path().join("selectors.json");

    fs::write(
        &html_path,
        r#"<html><body>
            <h2 class="person">Alex Moreno</h2>
            <p class="tagline">Product designer for developer tools</p>
        </body></html>"#,
    )
    .unwrap();
    fs::write(
        &selectors_path,
        r#"{
            "name": {"field": "name", "strategies": ["h2.person"]},
            "headline": {"field": "headline", "strategies": ["p.tagline"]},
            "about": {"field": "about", "strategies": [".bio-text"]},
            "experience": {
                "sections": {"field": "experience", "strategies": [".job"]},
                "roles": {"field": "experience.role", "strategies": [".job-title"]}
            }
        }"#,
    )
    .unwrap();

    scout_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--url")
        .arg("https://people.example/in/alex")
        .arg("--selectors")
        .arg(&selectors_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Alex Moreno\""))
        .stdout(predicate::str::contains("Product designer for developer tools"))
        .stdout(predicate::str::contains("No about section found"))
        .stdout(predicate::str::contains("No experience found"));
}

#[test]
fn malformed_selector_registry_fails() {
    let temp_dir = TempDir::new().unwrap();
    let selectors_path = temp_dir.path().join("selectors.json");
    fs::write(&selectors_path, "{\"name\": ").unwrap();

    scout_cmd()
        .arg("--html")
        .arg(fixture("current_layout"))
        .arg("--url")
        .arg(PROFILE_URL)
        .arg("--selectors")
        .arg(&selectors_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse selector registry"));
}

#[test]
fn host_flag_restricts_profile_pages() {
    scout_cmd()
        .arg("--html")
        .arg(fixture("current_layout"))
        .arg("--url")
        .arg("https://people.example/in/jane-doe")
        .arg("--host")
        .arg("linkedin.com")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a profile page"));
}

#[test]
fn timing_flag_reports_elapsed() {
    scout_cmd()
        .arg("--html")
        .arg(fixture("current_layout"))
        .arg("--url")
        .arg(PROFILE_URL)
        .arg("--timing")
        .assert()
        .success()
        .stderr(predicate::str::contains("elapsed:"));
}
