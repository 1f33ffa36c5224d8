use predicates::prelude::*;

use crate::common::readability;

#[test]
fn shows_help() {
    readability()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("readability"))
        .stdout(predicate::str::contains("--score"));
}

#[test]
fn shows_version() {
    readability()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_file_argument_is_a_usage_error() {
    readability().assert().code(2).stderr(predicate::str::contains("<FILE>"));
}

#[test]
fn rejects_unknown_score_flag() {
    readability()
        .args(["--score", "grade", "whatever.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}
