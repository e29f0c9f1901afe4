//! End-to-end tests for the `cellar` binary.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn cellar(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cellar"))
        .args(args)
        .output()
        .expect("Failed to run cellar")
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_add_then_list() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("home.cellar");
    let file = path_str(&file);

    for bottle in ["1234~01/03/16~bomber", "1234~01/01/16~bomber", "1234~01/02/16~bomber"] {
        let output = cellar(&["add", file, bottle]);
        assert!(output.status.success(), "add {bottle} failed");
    }

    let output = cellar(&["list", file]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("01/01/16"));
    assert!(lines[1].contains("01/02/16"));
    assert!(lines[2].contains("01/03/16"));
}

#[test]
fn test_add_incompatible_size_exits_one() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("home.cellar");
    let file = path_str(&file);

    assert!(cellar(&["add", file, "1234~01/01/16~bomber"]).status.success());
    let output = cellar(&["add", file, "1234~01/02/16~small"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--force"));
}

#[test]
fn test_list_missing_file_exits_one() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("missing.cellar");

    let output = cellar(&["list", path_str(&file)]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cost_sentinel_on_empty_cellar() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("missing.cellar");

    let output = cellar(&["cost", path_str(&file), "1234~01/01/16", "--sentinel"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "32767");
}

#[test]
fn test_generate_completions() {
    let output = cellar(&["--generate-completions", "bash"]);
    assert!(output.status.success());
    assert!(!output.stdout.is_empty());
}
