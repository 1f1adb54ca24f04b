//! Runs the binary against captured telemetry dumps and checks the exact line.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::fixture_command;

fn check(fixture: &str, expected: &str) {
    fixture_command(fixture)
        .assert()
        .success()
        .stdout(format!("{expected}\n"));
}

#[test]
fn discharging() {
    check("discharging.regular", "0 89 9156 2:32");
    check("discharging.low", "0 30 7772 2:9");
    check("discharging.full-no-rate", "0 100 0 0:0");
    check("discharging.negative-power", "0 75 18684 5:11");
    check("discharging.charge-family", "0 73 4121 1:8");
}

#[test]
fn charging() {
    check("charging.zero-rate", "1 45 0 0:0");
    check("not-charging", "0 89 0 0:0");
    check("charging.regular", "1 21 3936 1:5");
    check("charging.mAh", "1 96 501 0:8");
    check("full.ratio-over-100", "0 100 0 0:0");
}

#[test]
fn bare_attribute_names() {
    check("bare-attributes", "0 89 9156 2:32");
}

#[test]
fn repeated_runs_match() {
    let first = fixture_command("discharging.negative-power").output().unwrap();
    let second = fixture_command("discharging.negative-power").output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn insufficient_data() {
    fixture_command("insufficient")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("insufficient data"));
}

#[test]
fn missing_file() {
    fixture_command("does-not-exist")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unable to read the telemetry file"));
}
