//! The low-battery alarm.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{battstat_command, fixture_command};

#[test]
fn test_alarm_below_level() {
    fixture_command("discharging.low")
        .args(["--alarm", "40"])
        .assert()
        .success()
        .stdout("0 30 7772 2:9\n")
        .stderr(predicate::str::contains(
            "battery at 30%, below the alarm level of 40%.",
        ));
}

#[test]
fn test_alarm_at_level_is_quiet() {
    fixture_command("discharging.low")
        .args(["--alarm", "30"])
        .assert()
        .success()
        .stdout("0 30 7772 2:9\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_alarm_ignores_charging() {
    fixture_command("charging.regular")
        .args(["--alarm", "50"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn test_notify_command() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("notified");
    let notify = format!("echo \"low $BATTSTAT_PERCENTAGE\" > '{}'", out.display());

    fixture_command("discharging.low")
        .args(["--alarm", "40", "--notify", &notify])
        .assert()
        .success()
        .stdout("0 30 7772 2:9\n");

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "low 30\n");
}

#[cfg(unix)]
#[test]
fn test_failing_notify_command() {
    fixture_command("discharging.low")
        .args(["--alarm", "40", "--notify", "exit 4"])
        .assert()
        .failure()
        .stdout("0 30 7772 2:9\n")
        .stderr(predicate::str::contains("notify command 'exit 4' failed"));
}

#[test]
fn test_notify_needs_a_level() {
    battstat_command(&["--notify", "true", "./tests/fixtures/discharging.low.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("without an alarm level"));
}

#[test]
fn test_alarm_level_range() {
    fixture_command("discharging.low")
        .args(["--alarm", "101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("101"));
}
