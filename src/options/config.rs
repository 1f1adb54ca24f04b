pub mod alarm;
pub mod battery;

use std::{fs, path::Path};

use serde::Deserialize;

use self::{alarm::AlarmConfig, battery::BatteryConfig};
use super::{OptionError, OptionResult};

/// The battstat config file.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub(crate) battery: BatteryConfig,

    #[serde(default)]
    pub(crate) alarm: AlarmConfig,
}

impl Config {
    /// Reads and parses a config file.
    pub(crate) fn from_path(path: &Path) -> OptionResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub(crate) fn from_toml(contents: &str) -> OptionResult<Self> {
        toml_edit::de::from_str(contents).map_err(OptionError::from)
    }
}
