use std::path::PathBuf;

use serde::Deserialize;

/// Battery configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(deny_unknown_fields)]
pub(crate) struct BatteryConfig {
    /// The power-supply directory to read batteries from.
    pub(crate) sysfs_root: Option<PathBuf>,

    /// The battery read when none is given on the command line.
    pub(crate) default_battery: Option<String>,
}
