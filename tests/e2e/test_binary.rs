//! Integration tests for the bracket-drawer binary.
//!
//! These tests write roster CSVs to a temp directory, run the compiled
//! binary, and check its output and exit status.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path to the compiled binary, provided by cargo for integration tests.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_bracket-drawer"))
}

/// A fresh scratch directory for one test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("bracket_drawer_{}_{name}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write a roster with `n` teams named `{prefix} {seed}`.
fn write_roster(dir: &Path, file: &str, prefix: &str, n: usize) -> PathBuf {
    let mut csv = String::from("Seed,Team,Record\n");
    for seed in 1..=n {
        csv.push_str(&format!("{seed},{prefix} {seed},10-{seed}\n"));
    }
    let path = dir.join(file);
    fs::write(&path, csv).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .output()
        .expect("Failed to run binary")
}

/// Run the binary, assert success, return stdout.
fn run_ok(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

/// Run the binary, assert failure, return stderr.
fn run_err(args: &[&str]) -> String {
    let output = run(args);
    assert_eq!(output.status.code(), Some(1));
    String::from_utf8(output.stderr).expect("Non-UTF8 stderr")
}

fn rosters(name: &str, n: usize) -> (PathBuf, PathBuf, PathBuf) {
    let dir = scratch_dir(name);
    let left = write_roster(&dir, "left.csv", "North", n);
    let right = write_roster(&dir, "right.csv", "South", n);
    (dir, left, right)
}

// ─── Output formats ──────────────────────────────────────────────────────────

#[test]
fn test_svg_default() {
    let (dir, left, right) = rosters("svg", 16);
    let out = run_ok(&[
        "--left",
        left.to_str().unwrap(),
        "--right",
        right.to_str().unwrap(),
        "--title",
        "State Tournament",
    ]);
    assert!(out.starts_with("<svg "));
    assert!(out.trim_end().ends_with("</svg>"));
    assert!(out.contains(">State Tournament</text>"));
    for seed in 1..=16 {
        assert!(out.contains(&format!("#{seed}  - North {seed}<")));
        assert!(out.contains(&format!("#{seed}  - South {seed}<")));
    }
    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_text_format_ascii() {
    let (dir, left, right) = rosters("text", 8);
    let out = run_ok(&[
        "--size",
        "16",
        "--left",
        left.to_str().unwrap(),
        "--right",
        right.to_str().unwrap(),
        "--format",
        "text",
        "--ascii",
    ]);
    assert!(!out.contains('─'), "Unicode char found in --ascii output");
    assert!(!out.contains('│'), "Unicode char found in --ascii output");
    assert!(out.contains('+'));
    let first = out.lines().next().unwrap();
    assert!(first.starts_with("#1  - North 1 -"));
    assert!(first.ends_with("- #1  - South 1"));
    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_json_format() {
    let (dir, left, right) = rosters("json", 8);
    let out = run_ok(&[
        "-s",
        "16",
        "--left",
        left.to_str().unwrap(),
        "--right",
        right.to_str().unwrap(),
        "-f",
        "json",
    ]);
    assert!(out.contains("\"num_rounds\": 3"));
    assert!(out.contains("\"direction\": \"Left\""));
    fs::remove_dir_all(dir).ok();
}

// ─── Flags ───────────────────────────────────────────────────────────────────

#[test]
fn test_swap_and_suffix() {
    let (dir, left, right) = rosters("swap", 8);
    let out = run_ok(&[
        "-s",
        "16",
        "--left",
        left.to_str().unwrap(),
        "--right",
        right.to_str().unwrap(),
        "-f",
        "text",
        "--suffix",
        "3A",
        "--swap-left",
        "1,2",
    ]);
    let first = out.lines().next().unwrap();
    assert!(first.starts_with("#2 3A - North 2 "));
    assert!(first.ends_with(" #1 3A - South 1"));
    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_output_to_file() {
    let (dir, left, right) = rosters("write", 16);
    let out_file = dir.join("bracket.svg");
    let stdout = run_ok(&[
        "--left",
        left.to_str().unwrap(),
        "--right",
        right.to_str().unwrap(),
        "--output",
        out_file.to_str().unwrap(),
    ]);
    assert!(stdout.is_empty());
    let content = fs::read_to_string(&out_file).unwrap();
    assert!(content.starts_with("<svg "));
    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_logo_embedded() {
    let (dir, left, right) = rosters("logo", 8);
    let logo = dir.join("logo.png");
    fs::write(&logo, b"\x89PNG\r\n\x1a\n0000").unwrap();
    let out = run_ok(&[
        "-s",
        "16",
        "--left",
        left.to_str().unwrap(),
        "--right",
        right.to_str().unwrap(),
        "--logo",
        logo.to_str().unwrap(),
    ]);
    assert!(out.contains("href=\"data:image/png;base64,"));
    fs::remove_dir_all(dir).ok();
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[test]
fn test_unsupported_size() {
    let (dir, left, right) = rosters("size", 12);
    let err = run_err(&[
        "-s",
        "24",
        "--left",
        left.to_str().unwrap(),
        "--right",
        right.to_str().unwrap(),
    ]);
    assert!(err.contains("invalid configuration"));
    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_roster_too_short() {
    let (dir, left, right) = rosters("short", 8);
    let err = run_err(&["--left", left.to_str().unwrap(), "--right", right.to_str().unwrap()]);
    assert!(err.contains("invalid argument"));
    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_missing_logo() {
    let (dir, left, right) = rosters("nologo", 8);
    let err = run_err(&[
        "-s",
        "16",
        "--left",
        left.to_str().unwrap(),
        "--right",
        right.to_str().unwrap(),
        "--logo",
        dir.join("missing.png").to_str().unwrap(),
    ]);
    assert!(err.contains("file not found"));
    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_bad_swap() {
    let (dir, left, right) = rosters("badswap", 8);
    let err = run_err(&[
        "-s",
        "16",
        "--left",
        left.to_str().unwrap(),
        "--right",
        right.to_str().unwrap(),
        "--swap-right",
        "1-2",
    ]);
    assert!(err.contains("swap pair"));
    fs::remove_dir_all(dir).ok();
}
