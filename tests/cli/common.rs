//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("hearth")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hearth turns a directory"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("hearth")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("hearth")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("hearth")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_build_help() {
    cargo_bin_cmd!("hearth")
        .args(["build", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("write the"));
}

#[test]
fn test_check_help() {
    cargo_bin_cmd!("hearth")
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("report"));
}

#[test]
fn test_parse_help() {
    cargo_bin_cmd!("hearth")
        .args(["parse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parse one recipe document"));
}
