use std::borrow::Cow;

use thiserror::Error;

/// Why the config file or the command line could not be turned into settings.
///
/// The reason is shown to the user as-is, so it should say what to fix. Quote
/// offending values and paths with single quotes (e.g. `'BAT9'`).
#[derive(Debug, PartialEq, Eq, Error)]
pub enum OptionError {
    /// The config file parsed badly or holds a bad value.
    #[error("invalid config file {0}")]
    Config(Cow<'static, str>),
    /// A command-line value could not be used.
    #[error("invalid argument: {0}")]
    Argument(Cow<'static, str>),
    /// The config file exists but could not be read.
    #[error("unable to read the config file: {0}")]
    Unreadable(Cow<'static, str>),
}

impl OptionError {
    pub(crate) fn config<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        OptionError::Config(reason.into())
    }

    pub(crate) fn arg<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        OptionError::Argument(reason.into())
    }
}

pub type OptionResult<T> = Result<T, OptionError>;

impl From<toml_edit::de::Error> for OptionError {
    fn from(err: toml_edit::de::Error) -> Self {
        OptionError::config(err.to_string())
    }
}

impl From<std::io::Error> for OptionError {
    fn from(err: std::io::Error) -> Self {
        OptionError::Unreadable(err.to_string().into())
    }
}
