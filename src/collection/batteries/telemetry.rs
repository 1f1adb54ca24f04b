//! Parsing and normalization of raw power-supply telemetry.
//!
//! The input is a flat dump of key/value lines, as found in
//! `/sys/class/power_supply/<name>/uevent`:
//!
//! ```text
//! POWER_SUPPLY_STATUS=Discharging
//! POWER_SUPPLY_ENERGY_NOW=23250000
//! ```
//!
//! Bare attribute names (`energy_now=23250000`) are accepted as well. All
//! quantities are converted to micro-units here so nothing downstream has to
//! care which convention the vendor used.

use hashbrown::HashMap;

use crate::utils::error::{TelemetryError, TelemetryResult};

const KEY_PREFIX: &str = "power_supply_";

/// Raw attributes of a single power supply, keyed by their normalized name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAttributes {
    attributes: HashMap<String, String>,
}

impl RawAttributes {
    /// Returns the raw value of an attribute, if it was present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Inserts an attribute. The key is normalized the same way as during
    /// parsing.
    pub fn insert(&mut self, key: &str, value: &str) {
        if let Some(key) = normalize_key(key) {
            self.attributes.insert(key, value.trim().to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    fn int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|value| value.parse::<i64>().ok())
    }
}

/// Trims, drops the `POWER_SUPPLY_` prefix, and lowercases a key.
fn normalize_key(key: &str) -> Option<String> {
    let key = key.trim().to_ascii_lowercase();
    let key = match key.strip_prefix(KEY_PREFIX) {
        Some(stripped) => stripped.to_string(),
        None => key,
    };

    if key.is_empty() { None } else { Some(key) }
}

/// Parses a telemetry dump into [`RawAttributes`].
///
/// Each line is split on its first `=`, falling back to its first `:`. Lines
/// that match neither are skipped, so unknown vendor output never causes a
/// failure. Later duplicates replace earlier ones.
pub fn parse(raw_text: &str) -> RawAttributes {
    let mut raw = RawAttributes::default();

    for line in raw_text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let split = line.split_once('=').or_else(|| line.split_once(':'));
        if let Some((key, value)) = split {
            raw.insert(key, value);
        }
    }

    raw
}

/// The reported state of a power supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerStatus {
    Charging,
    Discharging,
    Full,
    NotCharging,
    Unknown,
}

impl PowerStatus {
    /// Maps a status token. Matching is case-sensitive; anything that isn't one
    /// of the kernel's tokens is [`PowerStatus::Unknown`].
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "Charging" => PowerStatus::Charging,
            "Discharging" => PowerStatus::Discharging,
            "Full" => PowerStatus::Full,
            "Not charging" => PowerStatus::NotCharging,
            _ => PowerStatus::Unknown,
        }
    }

    /// The kernel's token for this status; `Unknown` renders as "Unknown".
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerStatus::Charging => "Charging",
            PowerStatus::Discharging => "Discharging",
            PowerStatus::Full => "Full",
            PowerStatus::NotCharging => "Not charging",
            PowerStatus::Unknown => "Unknown",
        }
    }
}

/// A physical quantity reported by a power supply, and the key suffixes used
/// to flag its unit.
#[derive(Debug, Clone, Copy)]
enum Quantity {
    Charge,
    Energy,
    Current,
    Voltage,
    Power,
}

impl Quantity {
    /// Suffixes of keys already in micro-units, and of keys in milli-units.
    fn suffixes(self) -> (&'static str, &'static str) {
        match self {
            Quantity::Charge => ("_uah", "_mah"),
            Quantity::Energy => ("_uwh", "_mwh"),
            Quantity::Current => ("_ua", "_ma"),
            Quantity::Voltage => ("_uv", "_mv"),
            Quantity::Power => ("_uw", "_mw"),
        }
    }
}

/// Looks up `base` as a micro-unit value, trying the plain key, then the
/// micro-suffixed key, then the milli-suffixed key (scaled by 1000).
fn micro(raw: &RawAttributes, base: &str, quantity: Quantity) -> Option<i64> {
    let (micro_suffix, milli_suffix) = quantity.suffixes();

    raw.int(base)
        .or_else(|| raw.int(&format!("{base}{micro_suffix}")))
        .or_else(|| {
            raw.int(&format!("{base}{milli_suffix}"))
                .map(|milli| milli.saturating_mul(1000))
        })
}

/// A pair of "now" and "full" readings from the same capacity family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityPair {
    pub now: i64,
    pub full: i64,
}

impl CapacityPair {
    /// A pair is only usable as a ratio if both halves are known and the
    /// denominator is positive.
    fn resolve(now: Option<i64>, full: Option<i64>) -> Option<Self> {
        match (now, full) {
            (Some(now), Some(full)) if full > 0 => Some(CapacityPair { now, full }),
            _ => None,
        }
    }
}

/// Unit-normalized telemetry for one battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedAttributes {
    pub status: PowerStatus,
    /// Vendor-computed percentage from `capacity`.
    pub percentage_hint: Option<i64>,
    pub charge_now_uah: Option<i64>,
    pub charge_full_uah: Option<i64>,
    pub energy_now_uwh: Option<i64>,
    pub energy_full_uwh: Option<i64>,
    /// Signed as reported by the device.
    pub current_ua: Option<i64>,
    pub voltage_uv: Option<i64>,
    /// Read from `power_now`, or derived from current and voltage.
    pub power_uw: Option<i64>,
}

impl NormalizedAttributes {
    pub fn charge_pair(&self) -> Option<CapacityPair> {
        CapacityPair::resolve(self.charge_now_uah, self.charge_full_uah)
    }

    pub fn energy_pair(&self) -> Option<CapacityPair> {
        CapacityPair::resolve(self.energy_now_uwh, self.energy_full_uwh)
    }
}

/// Converts raw attributes into [`NormalizedAttributes`].
///
/// Fails with [`TelemetryError::InsufficientData`] if there is no way to
/// arrive at a percentage: no `capacity`, and neither a charge nor an energy
/// pair.
pub fn normalize(raw: &RawAttributes) -> TelemetryResult<NormalizedAttributes> {
    let status = raw
        .get("status")
        .map(PowerStatus::from_token)
        .unwrap_or(PowerStatus::Unknown);

    let charge_full_uah = micro(raw, "charge_full", Quantity::Charge)
        .or_else(|| micro(raw, "charge_full_design", Quantity::Charge));
    let energy_full_uwh = micro(raw, "energy_full", Quantity::Energy)
        .or_else(|| micro(raw, "energy_full_design", Quantity::Energy));

    let current_ua = micro(raw, "current_now", Quantity::Current);
    let voltage_uv = micro(raw, "voltage_now", Quantity::Voltage);
    let power_uw = micro(raw, "power_now", Quantity::Power).or_else(|| {
        current_ua
            .zip(voltage_uv)
            .map(|(current, voltage)| derive_power(current, voltage))
    });

    let attributes = NormalizedAttributes {
        status,
        percentage_hint: raw.int("capacity"),
        charge_now_uah: micro(raw, "charge_now", Quantity::Charge),
        charge_full_uah,
        energy_now_uwh: micro(raw, "energy_now", Quantity::Energy),
        energy_full_uwh,
        current_ua,
        voltage_uv,
        power_uw,
    };

    if attributes.percentage_hint.is_none()
        && attributes.charge_pair().is_none()
        && attributes.energy_pair().is_none()
    {
        return Err(TelemetryError::InsufficientData);
    }

    Ok(attributes)
}

/// `current * voltage / 1e6`, in micro-watts.
fn derive_power(current_ua: i64, voltage_uv: i64) -> i64 {
    let power = i128::from(current_ua) * i128::from(voltage_uv) / 1_000_000;
    i64::try_from(power).unwrap_or(if power < 0 { i64::MIN } else { i64::MAX })
}
