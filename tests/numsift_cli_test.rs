use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn numsift(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_numsift"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run numsift")
}

fn write_input(dir: &Path, content: &str) {
    std::fs::write(dir.join("numbers.txt"), content).unwrap();
}

#[test]
fn test_gt_filter_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    write_input(temp_dir.path(), "1 2 3 4 5 6");

    let output = numsift(temp_dir.path(), &["GT3", "numbers.txt"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Read and filtered number: 4\n\
         Read and filtered number: 5\n\
         Read and filtered number: 6\n\
         Number processing finished.\n\
         Total number of filtered numbers: 3\n"
    );
}

#[test]
fn test_malformed_tokens_are_skipped_with_warning() {
    let temp_dir = TempDir::new().unwrap();
    write_input(temp_dir.path(), "3 x 5\n7\n99999999999\n");

    let output = numsift(temp_dir.path(), &["ODD", "numbers.txt"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Read and filtered number: 3\n"));
    assert!(stdout.contains("Read and filtered number: 7\n"));
    assert!(stdout.contains("Total number of filtered numbers: 3"));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("invalid number 'x'").count(), 1);
    assert_eq!(stderr.matches("number out of range '99999999999'").count(), 1);
}

#[test]
fn test_even_includes_negatives() {
    let temp_dir = TempDir::new().unwrap();
    write_input(temp_dir.path(), "-4 -3\n0\n\n  7 10");

    let output = numsift(temp_dir.path(), &["EVEN", "numbers.txt"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    let numbers: Vec<_> = stdout
        .lines()
        .filter_map(|l| l.strip_prefix("Read and filtered number: "))
        .collect();
    assert_eq!(numbers, vec!["-4", "0", "10"]);
}

#[test]
fn test_missing_arguments_exit_with_usage() {
    let temp_dir = TempDir::new().unwrap();

    for args in [&[][..], &["EVEN"][..]] {
        let output = numsift(temp_dir.path(), args);
        assert_eq!(output.status.code(), Some(1));

        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("Usage"));
        assert!(stderr.contains("Available filters: EVEN, ODD, GT<n>"));
    }
}

#[test]
fn test_bad_filters_exit_before_reading() {
    let temp_dir = TempDir::new().unwrap();
    write_input(temp_dir.path(), "1 2 3");

    let cases = [
        ("XYZ", "Unknown filter type: XYZ"),
        ("GTabc", "Invalid argument for GT filter: abc"),
        ("GT", "Missing argument for GT filter"),
        ("GT99999999999", "Argument out of range for GT filter: 99999999999"),
    ];

    for (filter, message) in cases {
        let output = numsift(temp_dir.path(), &[filter, "numbers.txt"]);
        assert_eq!(output.status.code(), Some(1), "filter {filter}");
        assert!(output.stdout.is_empty());

        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains(message), "filter {filter}: {stderr}");
        assert!(stderr.contains("Available filters"));
    }
}

#[test]
fn test_missing_file_reports_and_exits_zero() {
    let temp_dir = TempDir::new().unwrap();

    let output = numsift(temp_dir.path(), &["EVEN", "absent.txt"]);
    assert!(output.status.success());

    // Observers are never finished when the read fails.
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.is_empty(), "{stdout}");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error during processing"));
    assert!(stderr.contains("Could not read file absent.txt"));
}

#[test]
fn test_non_utf8_input_is_processed() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("numbers.txt"), b"1 2\ncaf\xe9 3\n4\n").unwrap();

    let output = numsift(temp_dir.path(), &["GT0", "numbers.txt"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Read and filtered number: 3\n"));
    assert!(stdout.ends_with("Total number of filtered numbers: 4\n"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("invalid number 'caf").count(), 1);
}

#[test]
fn test_numeric_prefixes_in_input_and_filter() {
    let temp_dir = TempDir::new().unwrap();
    write_input(temp_dir.path(), "12abc 7 1.5 20");

    let output = numsift(temp_dir.path(), &["GT10x", "numbers.txt"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let numbers: Vec<_> = stdout
        .lines()
        .filter_map(|l| l.strip_prefix("Read and filtered number: "))
        .collect();
    assert_eq!(numbers, vec!["12", "20"]);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_help_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    let output = numsift(temp_dir.path(), &["--help"]);

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("GT10"));
}
