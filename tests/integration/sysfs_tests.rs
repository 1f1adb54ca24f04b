//! Reading batteries from a power-supply directory.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{battstat_command, FakeSysfs};

fn sysfs() -> FakeSysfs {
    FakeSysfs::new()
        .with_uevent("AC", "POWER_SUPPLY_NAME=AC\nPOWER_SUPPLY_ONLINE=0\n")
        .with_fixture("BAT1", "discharging.negative-power")
        .with_fixture("BAT0", "discharging.regular")
}

#[test]
fn test_list() {
    let sysfs = sysfs();
    battstat_command(&["--sysfs_root", sysfs.path(), "--list"])
        .assert()
        .success()
        .stdout("BAT0\nBAT1\n");
}

#[test]
fn test_first_battery_by_default() {
    let sysfs = sysfs();
    battstat_command(&["--sysfs_root", sysfs.path()])
        .assert()
        .success()
        .stdout("0 89 9156 2:32\n");
}

#[test]
fn test_named_battery() {
    let sysfs = sysfs();
    battstat_command(&["--sysfs_root", sysfs.path(), "-b", "BAT1"])
        .assert()
        .success()
        .stdout("0 75 18684 5:11\n");
}

#[test]
fn test_all_batteries() {
    let sysfs = sysfs();
    battstat_command(&["--sysfs_root", sysfs.path(), "--all"])
        .assert()
        .success()
        .stdout("0 89 9156 2:32\n0 75 18684 5:11\n");
}

#[test]
fn test_all_fails_on_one_bad_battery() {
    let sysfs = sysfs().with_fixture("BAT2", "insufficient");
    battstat_command(&["--sysfs_root", sysfs.path(), "--all"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("BAT2"));
}

#[test]
fn test_missing_battery() {
    let sysfs = sysfs();
    battstat_command(&["--sysfs_root", sysfs.path(), "-b", "BAT9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no battery found at 'BAT9'"));
}

#[test]
fn test_no_batteries() {
    let sysfs = FakeSysfs::new().with_uevent("AC", "POWER_SUPPLY_ONLINE=1\n");
    battstat_command(&["--sysfs_root", sysfs.path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no battery found"));
}
