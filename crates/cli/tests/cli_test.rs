//! End-to-end tests for the caserun binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn caserun(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("caserun").unwrap();
    cmd.current_dir(dir)
        .env("PROJECT_ROOT", dir)
        .env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &Path, json: serde_json::Value) {
    fs::write(
        dir.join(".caserun.json"),
        serde_json::to_string_pretty(&json).unwrap(),
    )
    .unwrap();
}

#[test]
fn test_list_prints_builtin_cases_in_order() {
    let temp = TempDir::new().unwrap();

    caserun(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout("cases/example\ncases/types/types\ncases/cluster/sync\ncases/auth\n");
}

#[test]
fn test_list_uses_discovered_config() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), serde_json::json!({ "cases": ["cases/auth", "cases/example"] }));

    caserun(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout("cases/auth\ncases/example\n");
}

#[test]
fn test_case_flags_override_config() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), serde_json::json!({ "cases": ["cases/auth"] }));

    caserun(temp.path())
        .args(["--case", "cases/cluster/sync", "--case", "cases/example", "list"])
        .assert()
        .success()
        .stdout("cases/cluster/sync\ncases/example\n");
}

#[test]
fn test_blank_case_flag_is_rejected() {
    let temp = TempDir::new().unwrap();

    caserun(temp.path())
        .args(["--case", "  ", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid case identifier"));
}

#[test]
fn test_dry_run_prints_command_without_running() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        serde_json::json!({
            "harness": { "command": "sh", "args": ["-c", "touch ran", "jury"] }
        }),
    );

    caserun(temp.path())
        .args(["run", "--dry-run"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(
                "sh -c 'touch ran' jury cases/example cases/types/types cases/cluster/sync cases/auth",
            )
            .and(predicate::str::contains("4. cases/auth")),
        );

    assert!(!temp.path().join("ran").exists());
}

#[test]
fn test_explicit_config_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ci.json");
    fs::write(&path, r#"{"cases": ["cases/types/types"]}"#).unwrap();

    caserun(temp.path())
        .args(["--config", path.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout("cases/types/types\n");
}

#[test]
fn test_malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".caserun.json"), "{ \"cases\": ").unwrap();

    caserun(temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[cfg(unix)]
#[test]
fn test_run_without_arguments_hands_cases_to_harness_once() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        serde_json::json!({
            "harness": {
                "command": "sh",
                "args": ["-c", "printf '%s\\n' \"$@\" >> invocations.log", "jury"]
            }
        }),
    );

    caserun(temp.path()).assert().success();

    let log = fs::read_to_string(temp.path().join("invocations.log")).unwrap();
    assert_eq!(
        log,
        "cases/example\ncases/types/types\ncases/cluster/sync\ncases/auth\n"
    );
}

#[cfg(unix)]
#[test]
fn test_run_with_empty_case_set_still_runs_harness() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        serde_json::json!({
            "cases": [],
            "harness": { "command": "sh", "args": ["-c", "echo $# > count", "jury"] }
        }),
    );

    caserun(temp.path()).arg("run").assert().success();

    let count = fs::read_to_string(temp.path().join("count")).unwrap();
    assert_eq!(count.trim(), "0");
}

#[cfg(unix)]
#[test]
fn test_working_dir_is_relative_to_config() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("suite")).unwrap();
    write_config(
        temp.path(),
        serde_json::json!({
            "cases": ["cases/auth"],
            "harness": { "command": "sh", "args": ["-c", "touch here", "jury"], "working_dir": "suite" }
        }),
    );

    caserun(temp.path()).arg("run").assert().success();

    assert!(temp.path().join("suite").join("here").exists());
}

#[cfg(unix)]
#[test]
fn test_harness_exit_code_is_propagated() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        serde_json::json!({
            "harness": { "command": "sh", "args": ["-c", "exit 3", "jury"] }
        }),
    );

    caserun(temp.path()).arg("run").assert().code(3);
}

#[cfg(unix)]
#[test]
fn test_harness_killed_by_signal_exits_one() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        serde_json::json!({
            "harness": { "command": "sh", "args": ["-c", "kill -9 $$", "jury"] }
        }),
    );

    caserun(temp.path()).arg("run").assert().code(1);
}

#[test]
fn test_missing_harness_program_fails() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        serde_json::json!({ "harness": { "command": "caserun-no-such-harness-binary" } }),
    );

    caserun(temp.path())
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to start harness program `caserun-no-such-harness-binary`",
        ));
}

#[test]
fn test_init_writes_builtin_config() {
    let temp = TempDir::new().unwrap();

    caserun(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join(".caserun.json")).unwrap())
            .unwrap();
    assert_eq!(
        written["cases"],
        serde_json::json!([
            "cases/example",
            "cases/types/types",
            "cases/cluster/sync",
            "cases/auth"
        ])
    );
    assert_eq!(written["harness"]["command"], "jury");
}

#[test]
fn test_init_keeps_existing_config_without_force() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), serde_json::json!({ "cases": ["mine"] }));

    caserun(temp.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    let content = fs::read_to_string(temp.path().join(".caserun.json")).unwrap();
    assert!(content.contains("mine"));

    caserun(temp.path()).args(["init", "--force"]).assert().success();
    let content = fs::read_to_string(temp.path().join(".caserun.json")).unwrap();
    assert!(!content.contains("mine"));
}
