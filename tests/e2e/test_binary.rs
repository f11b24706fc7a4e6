//! Integration tests for the shape-ascii binary.
//!
//! These tests run the compiled binary and verify the demo output against
//! the golden demos/demo.expect.txt file, plus the single-shape subcommands.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Get the path to the compiled binary (debug build, built by `cargo test`).
fn binary_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("shape-ascii");
    path
}

/// Get the golden file for the full demo.
fn demo_expect_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("demos");
    path.push("demo.expect.txt");
    path
}

/// Run the binary with the given CLI args. Returns stdout.
fn run_binary(args: &[&str]) -> String {
    let bin = binary_path();
    assert!(
        bin.exists(),
        "Binary not found at {:?}. Run `cargo build` first.",
        bin
    );

    let output = Command::new(&bin)
        .args(args)
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .output()
        .expect("Failed to run binary");

    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

// ─── Golden file tests ──────────────────────────────────────────────────────

#[test]
fn test_demo_matches_expect() {
    let expect_file = demo_expect_path();
    let expected = fs::read_to_string(&expect_file)
        .unwrap_or_else(|e| panic!("Cannot read {:?}: {}", expect_file, e));

    let actual = run_binary(&[]);

    assert!(
        actual == expected,
        "Demo output mismatch (expected {} bytes, got {} bytes)",
        expected.len(),
        actual.len()
    );
}

// ─── Subcommand tests ───────────────────────────────────────────────────────

#[test]
fn test_circle_subcommand() {
    let output = run_binary(&["circle", "--radius", "3"]);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Drawing a Circle (radius: 3):");
    assert_eq!(lines[1], "");
    assert_eq!(lines.len(), 9, "header + blank + 7 raster rows");
    assert_eq!(lines[2], "  ***  ");
    assert_eq!(lines[5], "*******");
}

#[test]
fn test_rect_subcommand() {
    let output = run_binary(&["rect", "--width", "4", "--height", "2"]);
    assert_eq!(output, "Drawing a Filled Rectangle (4x2):\n\n****\n****\n");
}

#[test]
fn test_triangle_subcommand_inverted() {
    let output = run_binary(&["triangle", "--height", "4", "--kind", "inverted"]);
    assert_eq!(
        output,
        "Drawing a Filled Inverted Triangle (height: 4):\n\n*******\n *****\n  ***\n   *\n"
    );
}

#[test]
fn test_triangle_defaults_to_right() {
    let output = run_binary(&["triangle", "--height", "3"]);
    assert!(output.starts_with("Drawing a Filled Right Triangle (height: 3):"));
    assert!(output.ends_with("*\n**\n***\n"));
}

// ─── Validation and error tests ─────────────────────────────────────────────

#[test]
fn test_invalid_radius_falls_back_with_warning() {
    let output = run_binary(&["circle", "--radius", "0"]);
    assert!(
        output.starts_with("Warning: Radius must be positive. Using default value: 5"),
        "Missing warning line, got: {}",
        output.lines().next().unwrap_or("")
    );
    assert!(output.contains("Drawing a Circle (radius: 5):"));
}

#[test]
fn test_unknown_triangle_kind_reports_error() {
    // run_binary already asserts the process still exits successfully.
    let output = run_binary(&["triangle", "--kind", "bogus"]);
    assert!(
        output.starts_with("Error occurred:"),
        "Expected error report, got: {}",
        output
    );
    assert!(output.contains("bogus"));
}

// ─── Output file tests ──────────────────────────────────────────────────────

#[test]
fn test_output_to_file() {
    let dir = std::env::temp_dir().join("shape_ascii_test_write");
    fs::create_dir_all(&dir).ok();
    let out_file = dir.join("out.txt");

    let bin = binary_path();
    let output = Command::new(&bin)
        .args(["--output", out_file.to_str().unwrap()])
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success());
    assert!(out_file.exists(), "Output file should exist");
    let content = fs::read_to_string(&out_file).unwrap();
    assert!(content.starts_with("Starting to draw shapes:"));
    assert!(content.contains("All shapes drawn successfully!"));

    fs::remove_file(&out_file).ok();
    fs::remove_dir(&dir).ok();
}
