//! Error code related to reading and interpreting battery telemetry.

use thiserror::Error;

/// A type alias for handling telemetry-related errors.
pub type TelemetryResult<T> = std::result::Result<T, TelemetryError>;

/// The errors that can happen while reading or interpreting telemetry.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// None of the capacity, charge pair or energy pair could be resolved, so
    /// there is no way to report a percentage.
    #[error("insufficient data: no capacity, charge pair or energy pair in the telemetry")]
    InsufficientData,
    /// An error when there is an IO exception.
    #[error(transparent)]
    InvalidIo(#[from] std::io::Error),
    /// The requested battery (or any battery at all) could not be found.
    #[error("no battery found at '{0}'")]
    NoBattery(String),
}
