use celestial_core::constants::SECONDS_PER_DAY_F64;

pub const SECONDS_TO_DAYS: f64 = 1.0 / SECONDS_PER_DAY_F64;

pub const MILLISECONDS_PER_DAY: i64 = 86_400_000;

/// Longest accepted ISO 8601 input, including fractional seconds and zone.
pub const MAX_ISO8601_LENGTH: usize = 40;
