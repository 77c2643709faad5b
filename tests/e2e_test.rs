/// End-to-end tests for the CLI
use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const LOCKFILE: &str = "foo@^1.0.0:\n  version \"1.2.3\"\n";

const ADVISORY: &str = r#"{"type":"auditAdvisory","data":{"resolution":{"id":1065},"advisory":{"module_name":"foo","vulnerable_versions":"<2.0.0","title":"Prototype Pollution","overview":"foo is vulnerable","references":"- link","severity":"high","findings":[{"version":"1.2.3"}]}}}"#;

fn project_with_lockfile() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("yarn.lock"), LOCKFILE).unwrap();
    temp_dir
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - empty stream against an existing lockfile
    #[test]
    fn test_exit_code_success() {
        let project = project_with_lockfile();
        cargo_bin_cmd!("yarn-audit-sonar")
            .current_dir(project.path())
            .write_stdin("")
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("yarn-audit-sonar").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("yarn-audit-sonar")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 1: Missing lockfile precondition
    #[test]
    fn test_exit_code_missing_lockfile() {
        let temp_dir = TempDir::new().unwrap();
        cargo_bin_cmd!("yarn-audit-sonar")
            .current_dir(temp_dir.path())
            .write_stdin("")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("yarn.lock file not found"));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("yarn-audit-sonar")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("yarn-audit-sonar")
            .args(["-f", "sarif"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - malformed audit record
    #[test]
    fn test_exit_code_malformed_record() {
        let project = project_with_lockfile();
        cargo_bin_cmd!("yarn-audit-sonar")
            .current_dir(project.path())
            .write_stdin("{not json\n")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Malformed audit record"));
    }
}

#[test]
fn test_e2e_sonar_format() {
    let project = project_with_lockfile();

    cargo_bin_cmd!("yarn-audit-sonar")
        .current_dir(project.path())
        .env("NO_COLOR", "1")
        .write_stdin(format!("{}\n", ADVISORY))
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"rules\""))
        .stdout(predicate::str::contains("\"engineId\":\"yarn-audit\""))
        .stdout(predicate::str::contains("\"severity\":\"MEDIUM\""))
        .stdout(predicate::str::contains(
            "\"textRange\":{\"startLine\":2,\"endLine\":2,\"startColumn\":1,\"endColumn\":17}",
        ))
        .stderr(predicate::str::contains("yarn audit:"))
        .stderr(predicate::str::contains("1 vulnerabilities found"))
        .stderr(predicate::str::contains("Severity: 1 high"));
}

#[test]
fn test_e2e_issues_format() {
    let project = project_with_lockfile();

    cargo_bin_cmd!("yarn-audit-sonar")
        .current_dir(project.path())
        .env("NO_COLOR", "1")
        .args(["-f", "issues"])
        .write_stdin(format!("{}\n", ADVISORY))
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("{\"issues\":[{"))
        .stdout(predicate::str::contains("\"severity\":\"CRITICAL\""))
        .stdout(predicate::str::contains("\"type\":\"VULNERABILITY\""))
        .stdout(predicate::str::contains("\"message\":\"foo is vulnerable\""))
        .stdout(predicate::str::ends_with("}]}\n"));
}

#[test]
fn test_e2e_duplicate_advisories_counted_once() {
    let project = project_with_lockfile();

    cargo_bin_cmd!("yarn-audit-sonar")
        .current_dir(project.path())
        .env("NO_COLOR", "1")
        .write_stdin(format!("{}\n{}\n", ADVISORY, ADVISORY))
        .assert()
        .code(0)
        .stderr(predicate::str::contains("1 vulnerabilities found"));
}

#[test]
fn test_e2e_zero_advisories_summary_omits_breakdown() {
    let project = project_with_lockfile();

    cargo_bin_cmd!("yarn-audit-sonar")
        .current_dir(project.path())
        .env("NO_COLOR", "1")
        .write_stdin("")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"rules\":[]"))
        .stderr(predicate::str::contains("0 vulnerabilities found"))
        .stderr(predicate::str::contains("Severity:").not());
}

#[test]
fn test_e2e_lockfile_option_stamps_file_path() {
    let temp_dir = TempDir::new().unwrap();
    let lockfile_path = temp_dir.path().join("custom.lock");
    fs::write(&lockfile_path, LOCKFILE).unwrap();
    let lockfile_arg = lockfile_path.to_str().unwrap().to_string();

    cargo_bin_cmd!("yarn-audit-sonar")
        .args(["--lockfile", &lockfile_arg])
        .write_stdin(format!("{}\n", ADVISORY))
        .assert()
        .code(0)
        .stdout(predicate::str::contains(format!(
            "\"filePath\":\"{}\"",
            lockfile_arg
        )));
}

#[test]
fn test_e2e_output_file() {
    let project = project_with_lockfile();
    let report_path = project.path().join("report.json");

    cargo_bin_cmd!("yarn-audit-sonar")
        .current_dir(project.path())
        .args(["-o", "report.json"])
        .write_stdin(format!("{}\n", ADVISORY))
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&report_path).unwrap();
    let document: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(document["issues"].as_array().unwrap().len(), 1);
    assert_eq!(document["rules"][0]["id"], "1065");
}
