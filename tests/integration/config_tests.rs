//! Config file handling through the binary.

use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::util::{battstat_command, FakeSysfs};

#[test]
fn test_missing_config() {
    battstat_command(&["-C", "./tests/this_config_does_not_exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("battstat.toml");
    fs::write(&path, "[battery]\ndefault_battery = 0\n").unwrap();

    battstat_command(&["-C", path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unable to parse the config file"));
}

#[test]
fn test_config_selects_battery() {
    let sysfs = FakeSysfs::new()
        .with_fixture("BAT0", "discharging.regular")
        .with_fixture("BAT1", "charging.regular");

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("battstat.toml");
    fs::write(
        &path,
        format!(
            "[battery]\nsysfs_root = {:?}\ndefault_battery = \"BAT1\"\n",
            sysfs.path()
        ),
    )
    .unwrap();

    battstat_command(&["-C", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("1 21 3936 1:5\n");

    // Arguments still win over the config.
    battstat_command(&["-C", path.to_str().unwrap(), "-b", "BAT0"])
        .assert()
        .success()
        .stdout("0 89 9156 2:32\n");
}
