//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::battstat_command;

#[test]
fn test_help() {
    battstat_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Battery Options"));
}

#[test]
fn test_version() {
    battstat_command(&["-V"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag() {
    battstat_command(&["--this_does_not_exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_battery_conflicts_with_all() {
    battstat_command(&["--battery", "BAT0", "--all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
