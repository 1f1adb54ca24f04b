//! A customizable battery status reporter. Reads raw power-supply telemetry
//! and prints one normalized status line per battery:
//!
//! ```text
//! <charging:0|1> <percentage> <power in µW> <hours>:<minutes>
//! ```
//!
//! The library side exposes the parser and estimator in
//! [`collection::batteries`], which are pure and do no I/O.

pub(crate) mod utils {
    pub(crate) mod error;
    pub(crate) mod logging;
}
pub mod alarm;
pub mod collection;
pub mod options;

use std::{
    fs,
    io::{stderr, stdout, Write},
    path::Path,
};

use anyhow::{Context, Result};

pub use crate::utils::error::{TelemetryError, TelemetryResult};
use crate::{
    collection::batteries::{status_from_telemetry, sysfs, StatusResult},
    options::{args, get_config, init_settings, BattstatSettings, Input},
};

/// Reads a telemetry dump from disk and runs it through the status pipeline.
pub fn status_from_file(path: &Path) -> Result<StatusResult> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Unable to read the telemetry file '{}'.", path.display()))?;

    status_from_telemetry(&contents)
        .with_context(|| format!("Unable to get a battery status from '{}'.", path.display()))
}

/// Computes the status of every battery the settings select. Fails as a whole
/// if any battery fails. [`Input::ListBatteries`] selects no statuses.
pub fn collect_statuses(settings: &BattstatSettings) -> Result<Vec<StatusResult>> {
    let root = settings.sysfs_root.as_path();

    let statuses = match &settings.input {
        Input::File(path) => vec![status_from_file(path)?],
        Input::Battery(preferred) => {
            let battery = sysfs::select_battery(root, preferred.as_deref())?;
            let status = sysfs::read_status(root, &battery)
                .with_context(|| format!("Unable to get a battery status for '{battery}'."))?;
            vec![status]
        }
        Input::AllBatteries => {
            let batteries = sysfs::list_batteries(root)?;
            if batteries.is_empty() {
                return Err(TelemetryError::NoBattery(root.display().to_string()).into());
            }

            batteries
                .iter()
                .map(|battery| {
                    sysfs::read_status(root, battery).with_context(|| {
                        format!("Unable to get a battery status for '{battery}'.")
                    })
                })
                .collect::<Result<Vec<_>>>()?
        }
        Input::ListBatteries => Vec::new(),
    };

    Ok(statuses)
}

/// Collects every line to print for the given settings. Nothing is printed if
/// any battery fails.
pub fn collect_lines(settings: &BattstatSettings) -> Result<Vec<String>> {
    if settings.input == Input::ListBatteries {
        return Ok(sysfs::list_batteries(&settings.sysfs_root)?);
    }

    Ok(collect_statuses(settings)?
        .iter()
        .map(ToString::to_string)
        .collect())
}

/// Main code to call to start battstat.
pub fn start_battstat() -> Result<()> {
    #[cfg(all(feature = "logging", debug_assertions))]
    {
        utils::logging::init_logger(log::LevelFilter::Debug, std::ffi::OsStr::new("debug.log"))?;
    }

    let args = args::get_args();
    let config = get_config(args.general_args.config_location.as_deref())
        .context("Unable to parse the config file.")?;
    let settings = init_settings(args, config).context("Unable to use the given options.")?;
    crate::debug!("Settings: {settings:?}");

    let (lines, statuses) = if settings.input == Input::ListBatteries {
        (collect_lines(&settings)?, Vec::new())
    } else {
        let statuses = collect_statuses(&settings)?;
        let lines = statuses.iter().map(ToString::to_string).collect();
        (lines, statuses)
    };

    let mut out = stdout().lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    drop(out);

    if let Some(alarm) = &settings.alarm {
        alarm.check(&statuses, &mut stderr().lock())?;
    }

    Ok(())
}
