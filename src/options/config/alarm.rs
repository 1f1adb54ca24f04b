use serde::Deserialize;

/// Low-battery alarm configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(deny_unknown_fields)]
pub(crate) struct AlarmConfig {
    /// The percentage below which a discharging battery raises the alarm.
    pub(crate) level: Option<u8>,

    /// A shell command to run when the alarm is raised.
    pub(crate) notify: Option<String>,
}
