use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SOURCE: &str = "a=1; // keep\nb=22; // also\n";

fn aligned(pad_a: usize, pad_b: usize) -> String {
    format!(
        "a=1;{}// keep\nb=22;{}// also\n",
        " ".repeat(pad_a),
        " ".repeat(pad_b)
    )
}

fn command() -> Command {
    Command::cargo_bin("align-comments").unwrap()
}

#[test]
fn test_stdin_to_stdout_without_subcommand() {
    command()
        .write_stdin(SOURCE)
        .assert()
        .success()
        .stdout(aligned(65, 64));
}

#[test]
fn test_align_with_min_column() {
    command()
        .args(["align", "--min-column", "10"])
        .write_stdin(SOURCE)
        .assert()
        .success()
        .stdout(aligned(15, 14));
}

#[test]
fn test_align_rejects_negative_min_column() {
    command()
        .args(["align", "--min-column", "-3"])
        .write_stdin(SOURCE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn test_align_rejects_min_column_above_limit() {
    command()
        .args(["align", "-m", "9223372036854775807"])
        .write_stdin(SOURCE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 9999"));
}

#[test]
fn test_align_preserve_final_newline() {
    command()
        .args(["align", "-m", "0", "--preserve-final-newline"])
        .write_stdin("x; // y")
        .assert()
        .success()
        .stdout("x;       // y");

    command()
        .args(["align", "-m", "0"])
        .write_stdin("x; // y")
        .assert()
        .success()
        .stdout("x;       // y\n");
}

#[test]
fn test_align_file_to_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.c");
    let output = dir.path().join("output.c");
    fs::write(&input, SOURCE).unwrap();

    command()
        .arg("align")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--min-column", "10"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), aligned(15, 14));
    assert_eq!(fs::read_to_string(&input).unwrap(), SOURCE);
}

#[test]
fn test_align_in_place_multiple_files() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.c");
    let second = dir.path().join("second.c");
    let untouched = "int x;\n// nothing to do\n";
    fs::write(&first, SOURCE).unwrap();
    fs::write(&second, untouched).unwrap();

    command()
        .args(["align", "--in-place", "-m", "10"])
        .arg(&first)
        .arg(&second)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&first).unwrap(), aligned(15, 14));
    assert_eq!(fs::read_to_string(&second).unwrap(), untouched);
}

#[test]
fn test_align_multiple_files_need_in_place() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.c");
    let second = dir.path().join("second.c");
    fs::write(&first, SOURCE).unwrap();
    fs::write(&second, SOURCE).unwrap();

    command()
        .arg("align")
        .arg(&first)
        .arg(&second)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--in-place"));
}

#[test]
fn test_align_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.c");

    command()
        .arg("align")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_inspect_prints_report() {
    command()
        .args(["inspect", "--min-column", "10"])
        .write_stdin(SOURCE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"column\": 19"))
        .stdout(predicate::str::contains("\"column_one_based\": 20"))
        .stdout(predicate::str::contains("\"tactical_lines\": 2"))
        .stdout(predicate::str::contains("\"changed_lines\": 2"));
}
