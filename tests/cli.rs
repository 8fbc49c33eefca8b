//! Integration tests for the ccs CLI
//!
//! These tests run the actual binary and verify output and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const VALID_PIPELINE: &str = r"
apiVersion: v1
kind: Pipeline
spec:
  tasks:
  - name: build_app
    type: build
    needs: []
    build:
      environment: my-docker-image
      command: docker build $REPOSITORY_DIR
  - name: release_app
    type: release
    needs: [build_app]
    release:
      level: minor
      type: semver
  - name: deploy_app
    type: deployment
    needs: [release_app]
    deployment:
      environment: production
      release:
        task: release_app
";

/// Binary with a clean environment, run inside `dir`.
fn ccs_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ccs").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("CCS_FILE")
        .env_remove("CCS_LOG_LEVEL")
        .env_remove("CCS_DEBUG")
        .env_remove("CCS_VERBOSE")
        .env_remove("RUST_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents).unwrap();
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    ccs_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_validate_valid_pipeline() {
    let dir = TempDir::new().unwrap();
    write(&dir, "pipeline.yaml", VALID_PIPELINE);

    ccs_cmd(&dir)
        .args(["validate", "-f", "pipeline.yaml"])
        .assert()
        .success()
        .stdout("Pipeline validation succeeded\n");
}

#[test]
fn test_validate_defaults_to_ccs_yaml() {
    let dir = TempDir::new().unwrap();
    write(&dir, "ccs.yaml", VALID_PIPELINE);

    ccs_cmd(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pipeline validation succeeded"));
}

#[test]
fn test_validate_file_from_env() {
    let dir = TempDir::new().unwrap();
    write(&dir, "custom.yaml", VALID_PIPELINE);

    ccs_cmd(&dir)
        .env("CCS_FILE", "custom.yaml")
        .arg("validate")
        .assert()
        .success();
}

#[test]
fn test_validate_duplicate_task_names() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "ccs.yaml",
        r"
apiVersion: v1
kind: Pipeline
spec:
  tasks:
  - name: build_app_a
    type: build
    needs: []
    build:
      environment: my-docker-image
      command: docker build $REPOSITORY_DIR
  - name: build_app_a
    type: build
    needs: []
    build:
      environment: my-docker-image
      command: docker build $REPOSITORY_DIR
",
    );

    ccs_cmd(&dir)
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: pipeline validation failed: duplicate task name: build_app_a",
        ));
}

#[test]
fn test_validate_forward_dependency() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "ccs.yaml",
        r"
spec:
  tasks:
  - name: A
    type: build
    needs: [B]
    build: {command: make}
  - name: B
    type: build
    build: {command: make}
",
    );

    ccs_cmd(&dir)
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            r#"Error: pipeline validation failed: task validation failed: task "A" has an invalid dependency: "B""#,
        ));
}

#[test]
fn test_validate_invalid_type() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "ccs.yaml",
        "spec:\n  tasks:\n  - name: a\n    type: infra\n    build: {}\n",
    );

    ccs_cmd(&dir)
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: pipeline validation failed: task validation failed: task type validation failed: invalid task type: infra, allowed types: [build release deployment]",
        ));
}

#[test]
fn test_validate_multiple_actions() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "ccs.yaml",
        "spec:\n  tasks:\n  - name: a\n    type: build\n    build: {}\n    release: {}\n",
    );

    ccs_cmd(&dir)
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            r#"pipeline decoding failed: task "a" has more than one action type defined"#,
        ));
}

#[test]
fn test_validate_json_pipeline() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "ccs.json",
        r#"{"spec": {"tasks": [{"name": "a", "type": "build", "build": {"command": "make"}}]}}"#,
    );

    ccs_cmd(&dir)
        .args(["validate", "--file", "ccs.json"])
        .assert()
        .success();
}

#[test]
fn test_validate_missing_file() {
    let dir = TempDir::new().unwrap();

    ccs_cmd(&dir)
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pipeline file not found: ccs.yaml"));
}

#[test]
fn test_init_then_validate() {
    let dir = TempDir::new().unwrap();

    ccs_cmd(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout("Project initialized with configuration file: ccs.yaml\n");

    assert!(dir.path().join("ccs.yaml").exists());

    ccs_cmd(&dir).arg("validate").assert().success();
}

#[test]
fn test_init_does_not_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    write(&dir, "ccs.yaml", "existing");

    ccs_cmd(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(dir.path().join("ccs.yaml")).unwrap(), "existing");

    ccs_cmd(&dir).args(["init", "--force"]).assert().success();
    ccs_cmd(&dir).arg("validate").assert().success();
}

#[test]
fn test_init_interactive_checks_existing_file_before_prompting() {
    let dir = TempDir::new().unwrap();
    write(&dir, "ccs.yaml", "existing");

    ccs_cmd(&dir)
        .args(["init", "--interactive"])
        .write_stdin("node-20\nnpm run build\nmajor\nsemver\nstaging\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Enter task information").not())
        .stderr(predicate::str::contains(
            "ccs.yaml already exists, pass --force to overwrite it",
        ));
    assert_eq!(fs::read_to_string(dir.path().join("ccs.yaml")).unwrap(), "existing");
}

#[test]
fn test_init_interactive() {
    let dir = TempDir::new().unwrap();

    ccs_cmd(&dir)
        .args(["init", "--interactive", "-o", "custom.yaml"])
        .write_stdin("node-20\nnpm run build\nmajor\nsemver\nstaging\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Enter task information for the build task:",
        ))
        .stdout(predicate::str::contains(
            "Project initialized with configuration file: custom.yaml",
        ));

    let written = fs::read_to_string(dir.path().join("custom.yaml")).unwrap();
    assert!(written.contains("environment: node-20"));
    assert!(written.contains("environment: staging"));

    ccs_cmd(&dir)
        .args(["validate", "-f", "custom.yaml"])
        .assert()
        .success();
}

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();

    ccs_cmd(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ccs"));
}
