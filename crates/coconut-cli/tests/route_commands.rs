use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
        .canonicalize()
        .expect("fixture present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("coconut-cli");
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn help_flag_prints_usage_and_succeeds() {
    cli()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--input"));
}

#[test]
fn missing_options_print_usage_and_fail() {
    cli()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_option_prints_usage_and_fails() {
    cli()
        .arg("-x")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn sample_corridor_prints_classic_report() {
    cli()
        .arg("-i")
        .arg(fixture_path("sample_jetstreams.txt"))
        .assert()
        .success()
        .stdout(
            "Total Energy consumed on most efficient route: 458\n\
             Most Efficient route:\n\
             [(0, 5), (6, 11), (14, 17), (21, 31)]\n",
        );
}

#[test]
fn leading_gap_route_hides_filler_hop() {
    cli()
        .args(["--input"])
        .arg(fixture_path("leading_gap.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("route: 162"))
        .stdout(predicate::str::contains("[(3, 7)]"));
}

#[test]
fn json_format_reports_energy_breakdown() {
    let output = cli()
        .arg("-i")
        .arg(fixture_path("contiguous.txt"))
        .args(["--format", "json"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["total_energy"], 30);
    assert_eq!(value["filler_hops"], 0);
    assert_eq!(value["path"].as_array().map(Vec::len), Some(2));
}

#[test]
fn missing_file_reports_error() {
    let dir = tempdir().expect("create temp dir");
    cli()
        .arg("-i")
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load jetstreams"));
}

#[test]
fn malformed_input_aborts_without_output() {
    cli()
        .arg("-i")
        .arg(fixture_path("malformed.txt"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("malformed input on line 3"));
}

#[test]
fn empty_corridor_is_reported() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("only_energy.txt");
    fs::write(&path, "50\n").expect("write input");

    cli()
        .arg("-i")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("corridor is empty"));
}
