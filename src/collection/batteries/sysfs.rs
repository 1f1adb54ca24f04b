//! Reads live battery telemetry from the Linux power-supply class.
//!
//! For more details, see the relevant Linux kernel documentation:
//! - [`/sys/class/power_supply`](https://www.kernel.org/doc/Documentation/ABI/testing/sysfs-class-power)

use std::{
    fs,
    path::{Path, PathBuf},
};

use super::{status_from_telemetry, StatusResult};
use crate::utils::error::{TelemetryError, TelemetryResult};

/// The default location of power supplies on Linux.
pub const DEFAULT_SYSFS_ROOT: &str = "/sys/class/power_supply";

const BATTERY_PREFIX: &str = "BAT";

/// Returns the names of all batteries (`BAT*` entries) under `root`, ordered by
/// their numeric suffix. Entries without a numeric suffix sort last, by name.
pub fn list_batteries(root: &Path) -> TelemetryResult<Vec<String>> {
    let mut batteries = root
        .read_dir()?
        .flatten()
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            name.starts_with(BATTERY_PREFIX).then_some(name)
        })
        .collect::<Vec<_>>();

    batteries.sort_by_cached_key(|name| {
        let index = name[BATTERY_PREFIX.len()..].parse::<u32>().ok();
        (index.is_none(), index, name.clone())
    });

    Ok(batteries)
}

/// The path of a battery's `uevent` file.
pub fn uevent_path(root: &Path, battery: &str) -> PathBuf {
    root.join(battery).join("uevent")
}

/// Reads the raw `uevent` dump of a battery.
pub fn read_uevent(root: &Path, battery: &str) -> TelemetryResult<String> {
    let path = uevent_path(root, battery);
    if !path.exists() {
        return Err(TelemetryError::NoBattery(battery.to_string()));
    }

    Ok(fs::read_to_string(path)?)
}

/// Reads a battery and runs it through the status pipeline.
pub fn read_status(root: &Path, battery: &str) -> TelemetryResult<StatusResult> {
    crate::info!("Reading battery {battery} from {}", root.display());
    status_from_telemetry(&read_uevent(root, battery)?)
}

/// Picks the battery to read: the preferred one if given, otherwise the first
/// one listed under `root`.
pub fn select_battery(root: &Path, preferred: Option<&str>) -> TelemetryResult<String> {
    match preferred {
        Some(battery) => Ok(battery.to_string()),
        None => list_batteries(root)?
            .into_iter()
            .next()
            .ok_or_else(|| TelemetryError::NoBattery(root.display().to_string())),
    }
}
