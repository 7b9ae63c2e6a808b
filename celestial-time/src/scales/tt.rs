//! Terrestrial Time (TT).
//!
//! Every observation time in the workspace is a [`TT`]. Map headers carry
//! `DATE-OBS` strings which are parsed straight into TT; the difference from
//! UTC (about a minute) is below what a rotation of a few days can resolve.
//!
//! ```
//! use celestial_time::{Duration, TT};
//!
//! let t: TT = "2010-09-10T12:00:00".parse().unwrap();
//! let later = t + Duration::from_days(1.5);
//! assert_eq!(later.to_iso8601(), "2010-09-12T00:00:00.000");
//! ```

use crate::julian::JulianDate;
use crate::parsing::{format_iso8601, parse_iso8601};
use crate::{TimeError, TimeResult};
use celestial_core::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY_F64};
use celestial_core::Duration;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TT(JulianDate);

impl TT {
    pub fn from_julian_date(jd: JulianDate) -> Self {
        Self(jd)
    }

    pub fn j2000() -> Self {
        Self(JulianDate::j2000())
    }

    pub fn to_julian_date(&self) -> JulianDate {
        self.0
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        Self(self.0.add_seconds(seconds))
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self(self.0.add_days(days))
    }

    pub fn add_duration(&self, dt: Duration) -> Self {
        self.add_seconds(dt.seconds())
    }

    /// Signed elapsed time from `earlier` to `self`.
    pub fn duration_since(&self, earlier: &TT) -> Duration {
        Duration::from_seconds(self.0.days_since(&earlier.0) * SECONDS_PER_DAY_F64)
    }

    pub fn centuries_since_j2000(&self) -> f64 {
        ((self.0.jd1 - J2000_JD) + self.0.jd2) / DAYS_PER_JULIAN_CENTURY
    }

    pub fn is_finite(&self) -> bool {
        self.0.jd1.is_finite() && self.0.jd2.is_finite()
    }

    /// Formats as `YYYY-MM-DDTHH:MM:SS.sss`.
    ///
    /// Non-finite instants have no calendar form and yield an error.
    pub fn try_to_iso8601(&self) -> TimeResult<String> {
        Ok(format_iso8601(&self.0.to_calendar()?))
    }

    /// Formats as `YYYY-MM-DDTHH:MM:SS.sss`, or `"NaN"` for a non-finite instant.
    pub fn to_iso8601(&self) -> String {
        self.try_to_iso8601().unwrap_or_else(|_| "NaN".to_string())
    }
}

impl fmt::Display for TT {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} TT", self.to_iso8601())
    }
}

impl From<JulianDate> for TT {
    fn from(jd: JulianDate) -> Self {
        Self::from_julian_date(jd)
    }
}

impl FromStr for TT {
    type Err = TimeError;

    fn from_str(s: &str) -> TimeResult<Self> {
        let parsed = parse_iso8601(s)?;
        Ok(Self::from_julian_date(parsed.to_julian_date()))
    }
}

impl Sub for TT {
    type Output = Duration;

    fn sub(self, rhs: TT) -> Duration {
        self.duration_since(&rhs)
    }
}

impl Add<Duration> for TT {
    type Output = TT;

    fn add(self, dt: Duration) -> TT {
        self.add_duration(dt)
    }
}

pub fn tt_from_calendar(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> TT {
    TT::from_julian_date(JulianDate::from_calendar(year, month, day, hour, minute, second))
}
