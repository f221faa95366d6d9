// CLI integration tests: output shape, stderr messages and exit codes.
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;

const PHONES: &str = "name,brand,price,rating
iphone 15 pro,apple,999,4.9
galaxy s23 ultra,samsung,1199,4.8
redmi note 12,xiaomi,199,4.6
poco x5 pro,xiaomi,299,4.4
";

fn phones_file(dir: &Path) -> PathBuf {
    let path = dir.join("products.csv");
    std::fs::write(&path, PHONES).expect("write csv");
    path
}

fn run(args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_csv-sieve");
    Command::new(exe).args(args).output().expect("spawn csv-sieve")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8")
}

#[test]
fn grid_output_lists_matching_rows() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = phones_file(temp.path());
    let out = run(&["--file", path.to_str().unwrap(), "--where", "rating>4.7"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("iphone 15 pro"));
    assert!(text.contains("galaxy s23 ultra"));
    assert!(!text.contains("redmi"));
    assert!(text.contains("| name"));
}

#[test]
fn json_aggregate() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = phones_file(temp.path());
    let out = run(&[
        "--file",
        path.to_str().unwrap(),
        "--where",
        "brand=xiaomi",
        "--aggregate",
        "rating=min",
        "--format",
        "json",
    ]);
    assert!(out.status.success());
    let parsed: Value = serde_json::from_str(&stdout(&out)).expect("json");
    assert_eq!(parsed[0]["min"], 4.4);
}

#[test]
fn csv_output_round_trips_through_semicolon_input() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("semi.csv");
    std::fs::write(&path, "a;b\n1;x\n2;y\n").expect("write csv");
    let out = run(&[
        "--file",
        path.to_str().unwrap(),
        "--delimiter",
        ";",
        "--where",
        "a>1",
        "--format",
        "csv",
    ]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "a,b\n2,y\n");
}

#[test]
fn filter_error_exits_non_zero() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = phones_file(temp.path());
    let out = run(&["--file", path.to_str().unwrap(), "--where", "rating>=4.7"]);
    assert_eq!(out.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error: operators >= and <= are not supported"));
    assert!(out.stdout.is_empty());
}

#[test]
fn aggregation_error_exits_non_zero() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = phones_file(temp.path());
    let out = run(&["--file", path.to_str().unwrap(), "--aggregate", "brand=avg"]);
    assert_eq!(out.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("must contain only numbers"));
}

#[test]
fn missing_file_exits_with_not_found() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("nope.csv");
    let out = run(&["--file", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(5));
    assert!(String::from_utf8_lossy(&out.stderr).contains("file not found"));
}

#[test]
fn file_flag_is_required() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(csv_sieve::USAGE_EXIT_CODE));
}

#[test]
fn usage_and_filter_errors_have_distinct_codes() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = phones_file(temp.path());
    let usage = run(&["--where", "rating>4.7"]);
    let filter = run(&["--file", path.to_str().unwrap(), "--where", "rating>=4.7"]);
    assert!(!usage.status.success());
    assert!(!filter.status.success());
    assert_ne!(usage.status.code(), filter.status.code());
}
