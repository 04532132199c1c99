//! CLI integration tests
//!
//! These tests verify the command-line interface behavior, including:
//! - Command parsing and validation
//! - Generated file side effects
//! - Plan output formats
//! - Exit codes

mod support;

use std::env;
use std::path::PathBuf;
use std::process::Command;
use support::TestWorkspaceBuilder;

/// Helper to get the path to the jarpack binary
fn jarpack_bin() -> PathBuf {
    // In tests, the binary should be at target/debug/jarpack
    let mut path = env::current_exe()
        .expect("Failed to get current executable path")
        .parent()
        .expect("No parent")
        .parent()
        .expect("No parent")
        .to_path_buf();

    // If we're in deps/, go up one more level
    if path.ends_with("deps") {
        path = path.parent().expect("No parent").to_path_buf();
    }

    path.join("jarpack")
}

#[test]
fn test_cli_help() {
    let output = Command::new(jarpack_bin())
        .arg("--help")
        .output()
        .expect("Failed to execute jarpack");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("jarpack"));
    assert!(stdout.contains("generate"));
    assert!(stdout.contains("plan"));
}

#[test]
fn test_cli_version() {
    let output = Command::new(jarpack_bin())
        .arg("--version")
        .output()
        .expect("Failed to execute jarpack");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_writes_docker_resources() {
    let workspace = TestWorkspaceBuilder::new().file("app.jar").build();

    let output = Command::new(jarpack_bin())
        .arg("generate")
        .arg(workspace.path())
        .output()
        .expect("Failed to execute jarpack");

    assert!(output.status.success());
    assert!(workspace.exists("Dockerfile"));
    assert!(workspace.exists(".dockerignore"));
    assert!(workspace.read("Dockerfile").contains("COPY app.jar /app/"));
}

#[test]
fn test_generate_quiet_suppresses_output() {
    let workspace = TestWorkspaceBuilder::new().file("app.jar").build();

    let output = Command::new(jarpack_bin())
        .arg("-q")
        .arg("generate")
        .arg(workspace.path())
        .output()
        .expect("Failed to execute jarpack");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_generate_fails_on_empty_workspace() {
    let workspace = TestWorkspaceBuilder::new().build();

    let output = Command::new(jarpack_bin())
        .arg("generate")
        .arg(workspace.path())
        .output()
        .expect("Failed to execute jarpack");

    assert_eq!(output.status.code(), Some(1));
    assert!(!workspace.exists("Dockerfile"));
}

#[test]
fn test_generate_fails_on_missing_workspace() {
    let output = Command::new(jarpack_bin())
        .arg("generate")
        .arg("/definitely/not/a/dir")
        .output()
        .expect("Failed to execute jarpack");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_plan_json_output() {
    let workspace = TestWorkspaceBuilder::new().file("pom.xml").build();

    let output = Command::new(jarpack_bin())
        .arg("plan")
        .arg(workspace.path())
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to execute jarpack");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("plan output is not valid JSON");
    assert_eq!(value["steps"][0], "maven");
    assert_eq!(value["steps"][1], "source-build-image");
    assert_eq!(value["steps"][2], "runtime-options");
}

#[test]
fn test_plan_respects_overrides() {
    let workspace = TestWorkspaceBuilder::new()
        .file("pom.xml")
        .file_with_contents("app.yaml", "runtime_config:\n  jdk: openjdk8\n")
        .build();

    let output = Command::new(jarpack_bin())
        .arg("plan")
        .arg(workspace.path())
        .arg("--jdk")
        .arg("openjdk17")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to execute jarpack");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("plan output is not valid JSON");
    assert_eq!(value["runtime_config"]["jdk"], "openjdk17");
}

#[test]
fn test_plan_writes_no_files() {
    let workspace = TestWorkspaceBuilder::new().file("pom.xml").build();

    let output = Command::new(jarpack_bin())
        .arg("plan")
        .arg(workspace.path())
        .output()
        .expect("Failed to execute jarpack");

    assert!(output.status.success());
    assert!(!workspace.exists("Dockerfile"));
    assert!(!workspace.exists(".dockerignore"));
}

#[test]
fn test_invalid_override_is_a_usage_error() {
    let output = Command::new(jarpack_bin())
        .arg("generate")
        .arg("--set")
        .arg("no-equals-sign")
        .output()
        .expect("Failed to execute jarpack");

    assert_eq!(output.status.code(), Some(2));
}
