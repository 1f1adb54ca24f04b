//! How to handle config files and arguments.

pub mod args;
pub mod config;
mod error;

use std::path::{Path, PathBuf};

pub use error::{OptionError, OptionResult};

use self::{
    args::{AlarmArgs, Args},
    config::{alarm::AlarmConfig, Config},
};
use crate::{alarm::LowBatteryAlarm, collection::batteries::sysfs::DEFAULT_SYSFS_ROOT};

const DEFAULT_CONFIG_FILE_LOCATION: &str = "battstat/battstat.toml";

/// What the run should read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// A telemetry dump on disk.
    File(PathBuf),
    /// One battery from the power-supply directory. `None` means the first
    /// one found.
    Battery(Option<String>),
    /// Every battery in the power-supply directory.
    AllBatteries,
    /// Only list battery names.
    ListBatteries,
}

/// The resolved settings for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattstatSettings {
    pub sysfs_root: PathBuf,
    pub input: Input,
    pub alarm: Option<LowBatteryAlarm>,
}

/// Returns the config path to use. An explicitly passed path is always
/// returned; the default location is only returned if a file exists there.
pub fn get_config_path(override_config_path: Option<&Path>) -> OptionResult<Option<PathBuf>> {
    if let Some(path) = override_config_path {
        if !path.exists() {
            return Err(OptionError::arg(format!(
                "the config file '{}' does not exist.",
                path.display()
            )));
        }

        return Ok(Some(path.to_path_buf()));
    }

    Ok(dirs::config_dir()
        .map(|dir| dir.join(DEFAULT_CONFIG_FILE_LOCATION))
        .filter(|path| path.exists()))
}

/// Reads the config file, if there is one.
pub fn get_config(override_config_path: Option<&Path>) -> OptionResult<Config> {
    match get_config_path(override_config_path)? {
        Some(path) => {
            crate::info!("Using config file at {}", path.display());
            Config::from_path(&path).map_err(|err| match err {
                OptionError::Config(reason) => {
                    OptionError::config(format!("'{}': {reason}", path.display()))
                }
                err => err,
            })
        }
        None => Ok(Config::default()),
    }
}

/// Merges arguments and config into [`BattstatSettings`]. Arguments take
/// precedence over the config file.
pub fn init_settings(args: Args, config: Config) -> OptionResult<BattstatSettings> {
    let Args {
        file,
        battery_args,
        alarm_args,
        ..
    } = args;

    let alarm = get_alarm(alarm_args, config.alarm)?;

    let sysfs_root = battery_args
        .sysfs_root
        .or(config.battery.sysfs_root)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SYSFS_ROOT));

    let input = if let Some(file) = file {
        Input::File(file)
    } else if battery_args.list {
        Input::ListBatteries
    } else if battery_args.all {
        Input::AllBatteries
    } else {
        Input::Battery(battery_args.battery.or(config.battery.default_battery))
    };

    Ok(BattstatSettings {
        sysfs_root,
        input,
        alarm,
    })
}

fn get_alarm(args: AlarmArgs, config: AlarmConfig) -> OptionResult<Option<LowBatteryAlarm>> {
    let notify = args.notify.or(config.notify);

    let level = match (args.alarm, config.level) {
        (Some(level), _) => level,
        (None, Some(level)) if level > 100 => {
            return Err(OptionError::config(format!(
                "'level' under [alarm] must be between 0 and 100, got '{level}'."
            )));
        }
        (None, Some(level)) => level,
        (None, None) if notify.is_some() => {
            return Err(OptionError::arg(
                "a notify command was set without an alarm level; set '--alarm' or 'level' under [alarm].",
            ));
        }
        (None, None) => return Ok(None),
    };

    Ok(Some(LowBatteryAlarm { level, notify }))
}
