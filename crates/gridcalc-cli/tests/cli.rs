//! Tests that run the `gridcalc` binary

use pretty_assertions::assert_eq;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn input_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn gridcalc(args: &[&str], file: &NamedTempFile) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gridcalc"))
        .args(args)
        .arg(file.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_default_output() {
    let file = input_file("A | B\n1 | 2\n3 | 4\n=A1+B1 | =A2+B2\n");
    let output = gridcalc(&[], &file);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "A|B\n1.00|2.00\n3.00|4.00\n3.00|7.00\n");
}

#[test]
fn test_pretty_and_pad() {
    let file = input_file("Item | Cost\nTea | 3\nTotal | =B1*2\n");

    let output = gridcalc(&["--pp"], &file);
    assert_eq!(stdout(&output), "Item | Cost\nTea | 3.00\nTotal | 6.00\n");

    let output = gridcalc(&["--pretty", "--pad"], &file);
    assert_eq!(stdout(&output), "Item  | Cost\nTea   | 3.00\nTotal | 6.00\n");
}

#[test]
fn test_custom_format() {
    let file = input_file("1 | =A0/3\n");
    let output = gridcalc(&["-f", "%.3f"], &file);
    assert_eq!(stdout(&output), "1.000|0.333\n");

    let output = gridcalc(&["--format", "%g"], &file);
    assert_eq!(stdout(&output), "1|0.3333333333333333\n");
}

#[test]
fn test_invalid_format_rejected() {
    let file = input_file("1\n");
    let output = gridcalc(&["--format", "%d"], &file);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("%d"));
}

#[test]
fn test_debug_dump() {
    let file = input_file("1 | 2 | 3\n=A0+B0 | :< | x\n");
    let output = gridcalc(&["--debug"], &file);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "1.00|2.00|3.00\n3.00|5.00|x\n");

    // Grid after clone resolution, before evaluation
    let err = stderr(&output);
    assert!(err.contains("1.00|2.00|3.00\n=A0+B0|=B0+C0|x\n"), "stderr: {}", err);
    assert!(err.contains(&"-".repeat(80)));
}

#[test]
fn test_evaluation_error_exits_non_zero() {
    let file = input_file("Name | =A0*2\n");
    let output = gridcalc(&[], &file);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());

    let err = stderr(&output);
    assert!(err.contains("Failed to evaluate expressions"));
    assert!(err.contains("B0"));
}

#[test]
fn test_missing_input_file() {
    let file = input_file("");
    let missing = file.path().with_extension("missing");

    let output = Command::new(env!("CARGO_BIN_EXE_gridcalc"))
        .arg(&missing)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to read"));
}

#[test]
fn test_long_expression_file() {
    let terms = vec!["A0"; 20_000].join("+");
    let file = input_file(&format!("1\n={}\n", terms));
    let output = gridcalc(&[], &file);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "1.00\n20000.00\n");
}
