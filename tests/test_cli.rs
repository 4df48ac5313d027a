//! Integration tests for the powerline-cwd binary

mod common;

use common::TestTreeBuilder;
use std::process::{Command, Output};

fn run_cli(args: &[&str], home: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_powerline-cwd"))
        .args(args)
        .env("HOME", home)
        .env_remove("GOPATH")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run powerline-cwd")
}

#[test]
fn test_json_output() {
    let tree = TestTreeBuilder::new()
        .with_dir("home/u/proj")
        .build()
        .expect("Failed to build tree");
    let home = tree.abs("home/u");
    let path = tree.abs("home/u/proj");

    let output = run_cli(&["--path", &path, "--json"], &home);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    let segments = json.as_array().expect("Output should be an array");

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0]["content"], "~");
    assert_eq!(segments[0]["origin"], "cwd-path");
    assert_eq!(segments[1]["content"], "proj");
    assert_eq!(segments[1]["origin"], "cwd");
    assert!(segments[1].get("separator").is_none());
}

#[test]
fn test_text_output_with_dironly() {
    let tree = TestTreeBuilder::new()
        .with_dir("home/u/a/b")
        .build()
        .expect("Failed to build tree");

    let output = run_cli(
        &["--path", &tree.abs("home/u/a/b"), "--cwd-mode", "dironly"],
        &tree.abs("home/u"),
    );
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), "b");
}

#[test]
fn test_zero_depth_warns_but_succeeds() {
    let tree = TestTreeBuilder::new()
        .with_dir("home/u/a")
        .build()
        .expect("Failed to build tree");

    let output = run_cli(
        &["--path", &tree.abs("home/u/a"), "--cwd-max-depth", "0"],
        &tree.abs("home/u"),
    );
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Ignoring --cwd-max-depth"), "stderr: {stderr}");
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), "~ a");
}

#[test]
fn test_invalid_mode_fails() {
    let output = run_cli(&["--cwd-mode", "sideways"], "/nonexistent-home");
    assert!(!output.status.success());
}
