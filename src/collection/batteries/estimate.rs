//! Derives a [`StatusResult`] from normalized telemetry.

use std::fmt;

use super::telemetry::{CapacityPair, NormalizedAttributes, PowerStatus};

/// Where the reported percentage came from, in order of preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentageSource {
    Hint(i64),
    Charge(CapacityPair),
    Energy(CapacityPair),
}

impl PercentageSource {
    fn resolve(attributes: &NormalizedAttributes) -> Option<Self> {
        attributes
            .percentage_hint
            .map(PercentageSource::Hint)
            .or_else(|| attributes.charge_pair().map(PercentageSource::Charge))
            .or_else(|| attributes.energy_pair().map(PercentageSource::Energy))
    }

    fn percentage(&self) -> u8 {
        let percentage = match self {
            PercentageSource::Hint(hint) => *hint,
            PercentageSource::Charge(pair) | PercentageSource::Energy(pair) => ratio_percent(pair),
        };

        percentage.clamp(0, 100) as u8
    }
}

/// `round(now * 100 / full)`, rounding halves up. Negative readings count as
/// empty.
fn ratio_percent(pair: &CapacityPair) -> i64 {
    let now = i128::from(pair.now.max(0));
    let full = i128::from(pair.full);
    let rounded = (now * 200 + full) / (full * 2);

    i64::try_from(rounded).unwrap_or(i64::MAX)
}

/// The capacity family used for the time estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeFamily {
    Charge(CapacityPair),
    Energy(CapacityPair),
}

/// Estimated time until empty (or full, while charging).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeRemaining {
    pub hours: u64,
    /// Always in `0..60`.
    pub minutes: u8,
}

impl TimeRemaining {
    pub const ZERO: TimeRemaining = TimeRemaining {
        hours: 0,
        minutes: 0,
    };

    pub fn from_minutes(total_minutes: u64) -> Self {
        TimeRemaining {
            hours: total_minutes / 60,
            minutes: (total_minutes % 60) as u8,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// The estimate in seconds, saturating at `u64::MAX`. Sub-minute precision
    /// is not kept.
    pub fn as_secs(&self) -> u64 {
        self.hours
            .saturating_mul(3600)
            .saturating_add(u64::from(self.minutes) * 60)
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hours, self.minutes)
    }
}

/// The normalized status of one battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusResult {
    pub charging: bool,
    /// Always in `0..=100`.
    pub percentage: u8,
    /// Power draw magnitude in micro-watts. Direction is given by `charging`.
    pub power_uw: u64,
    pub remaining: TimeRemaining,
}

impl fmt::Display for StatusResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            u8::from(self.charging),
            self.percentage,
            self.power_uw,
            self.remaining
        )
    }
}

/// Computes the status of a battery from its normalized telemetry.
///
/// [`normalize`](super::telemetry::normalize) guarantees a percentage source
/// exists; a record built by hand without one reports 0%.
pub fn estimate(attributes: &NormalizedAttributes) -> StatusResult {
    crate::debug!("Status: {}", attributes.status.as_str());
    let charging = attributes.status == PowerStatus::Charging;

    let percentage = match PercentageSource::resolve(attributes) {
        Some(source) => {
            crate::debug!("Percentage source: {source:?}");
            source.percentage()
        }
        None => 0,
    };

    let power_uw = attributes.power_uw.map(i64::unsigned_abs).unwrap_or(0);
    let remaining = time_remaining(attributes, charging, percentage, power_uw);

    StatusResult {
        charging,
        percentage,
        power_uw,
        remaining,
    }
}

fn time_remaining(
    attributes: &NormalizedAttributes, charging: bool, percentage: u8, power_uw: u64,
) -> TimeRemaining {
    let is_terminal = (charging && percentage >= 100) || attributes.status == PowerStatus::Full;
    if is_terminal || power_uw == 0 {
        return TimeRemaining::ZERO;
    }

    let family = attributes
        .charge_pair()
        .map(TimeFamily::Charge)
        .or_else(|| attributes.energy_pair().map(TimeFamily::Energy));

    let Some(family) = family else {
        crate::debug!("No charge or energy pair, skipping the time estimate.");
        return TimeRemaining::ZERO;
    };

    let (pair, rate) = match family {
        TimeFamily::Charge(pair) => (pair, charge_rate(attributes, power_uw)),
        TimeFamily::Energy(pair) => (pair, Some(u128::from(power_uw))),
    };

    let rate = match rate {
        Some(rate) if rate > 0 => rate,
        _ => return TimeRemaining::ZERO,
    };

    let capacity = if charging {
        pair.full.saturating_sub(pair.now)
    } else {
        pair.now
    };
    let capacity = u128::from(capacity.max(0).unsigned_abs());

    let minutes = capacity * 60 / rate;
    TimeRemaining::from_minutes(u64::try_from(minutes).unwrap_or(u64::MAX))
}

/// The current in micro-amps, used as the rate for the charge family. Falls
/// back to `power / voltage` when the current is missing or reads zero.
fn charge_rate(attributes: &NormalizedAttributes, power_uw: u64) -> Option<u128> {
    if let Some(current) = attributes.current_ua.filter(|current| *current != 0) {
        return Some(u128::from(current.unsigned_abs()));
    }

    attributes
        .voltage_uv
        .filter(|voltage| *voltage != 0)
        .map(|voltage| u128::from(power_uw) * 1_000_000 / u128::from(voltage.unsigned_abs()))
}
