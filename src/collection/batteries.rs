//! Battery status from raw power-supply telemetry.
//!
//! The pipeline runs in one direction:
//!
//! 1. [`telemetry::parse`] turns a key/value dump into [`RawAttributes`].
//! 2. [`telemetry::normalize`] resolves field families and converts everything
//!    to micro-units, giving [`NormalizedAttributes`].
//! 3. [`estimate::estimate`] derives the charging flag, percentage, power draw
//!    and time remaining as a [`StatusResult`].
//!
//! Every step is a pure function of its input. [`sysfs`] is the only part that
//! touches the filesystem.

pub mod estimate;
pub mod sysfs;
pub mod telemetry;

pub use estimate::{estimate, PercentageSource, StatusResult, TimeRemaining};
pub use telemetry::{normalize, parse, NormalizedAttributes, PowerStatus, RawAttributes};

use crate::utils::error::TelemetryResult;

/// Runs a telemetry dump through the whole pipeline.
pub fn status_from_telemetry(raw_text: &str) -> TelemetryResult<StatusResult> {
    let raw = parse(raw_text);
    crate::debug!("Parsed {} attributes.", raw.len());

    let normalized = normalize(&raw)?;
    Ok(estimate(&normalized))
}
