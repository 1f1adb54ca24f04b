//! Data collection for power supplies.

pub mod batteries;
