use crate::constants::{MILLISECONDS_PER_DAY, SECONDS_TO_DAYS};
use crate::{TimeError, TimeResult};
use celestial_core::constants::{J2000_JD, MJD_ZERO_POINT, SECONDS_PER_DAY_F64};
use std::fmt;

/// A Julian Date split in two parts to keep sub-millisecond precision.
///
/// The split is arbitrary; `jd1 + jd2` is the date. Calendar construction puts
/// the midnight JD in `jd1` and the day fraction in `jd2`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

/// Gregorian calendar fields with the time of day as a millisecond count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub millisecond_of_day: i64,
}

impl CalendarDate {
    pub fn hour(&self) -> u8 {
        (self.millisecond_of_day / 3_600_000) as u8
    }

    pub fn minute(&self) -> u8 {
        ((self.millisecond_of_day / 60_000) % 60) as u8
    }

    pub fn second(&self) -> u8 {
        ((self.millisecond_of_day / 1000) % 60) as u8
    }

    pub fn millisecond(&self) -> u16 {
        (self.millisecond_of_day % 1000) as u16
    }
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn from_f64(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn jd1(&self) -> f64 {
        self.jd1
    }

    pub fn jd2(&self) -> f64 {
        self.jd2
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.jd1, self.jd2 + days)
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        self.add_days(seconds * SECONDS_TO_DAYS)
    }

    /// Days from `other` to `self`, differencing the parts separately.
    pub fn days_since(&self, other: &Self) -> f64 {
        (self.jd1 - other.jd1) + (self.jd2 - other.jd2)
    }

    /// Builds a date from Gregorian calendar fields.
    ///
    /// Uses the integer day-count arithmetic of `eraCal2jd`, so `jd1` lands on
    /// a midnight and `jd2` is the day fraction.
    pub fn from_calendar(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        let my = (month as i32 - 14) / 12;
        let iypmy = year + my;

        let mjd = ((1461 * (iypmy + 4800)) / 4 + (367 * (month as i32 - 2 - 12 * my)) / 12
            - (3 * ((iypmy + 4900) / 100)) / 4
            + day as i32
            - 2432076) as f64;

        let jd1 = MJD_ZERO_POINT + mjd;
        let jd2 = (60.0 * (60 * hour as i32 + minute as i32) as f64 + second) / SECONDS_PER_DAY_F64;

        Self::new(jd1, jd2)
    }

    /// Converts back to Gregorian calendar fields, rounded to the millisecond.
    ///
    /// Rounding can carry into the next day; the returned date accounts for it.
    pub fn to_calendar(&self) -> TimeResult<CalendarDate> {
        if !self.jd1.is_finite() || !self.jd2.is_finite() {
            return Err(TimeError::invalid_date(format!(
                "non-finite Julian date {}",
                self
            )));
        }

        // Civil days start at midnight, half a day before the JD integer.
        let d1 = self.jd1.floor();
        let d2 = self.jd2.floor();
        let mut day_number = d1 as i64 + d2 as i64;
        let mut fraction = (self.jd1 - d1) + (self.jd2 - d2) + 0.5;
        while fraction >= 1.0 {
            fraction -= 1.0;
            day_number += 1;
        }
        while fraction < 0.0 {
            fraction += 1.0;
            day_number -= 1;
        }

        let mut millis = (fraction * MILLISECONDS_PER_DAY as f64).round() as i64;
        if millis >= MILLISECONDS_PER_DAY {
            millis -= MILLISECONDS_PER_DAY;
            day_number += 1;
        }

        let (year, month, day) = gregorian_from_day_number(day_number);
        Ok(CalendarDate {
            year,
            month,
            day,
            millisecond_of_day: millis,
        })
    }
}

// Fliegel and Van Flandern (1968).
fn gregorian_from_day_number(jdn: i64) -> (i32, u8, u8) {
    let mut l = jdn + 68569;
    let n = (4 * l) / 146097;
    l -= (146097 * n + 3) / 4;
    let i = (4000 * (l + 1)) / 1461001;
    l = l - (1461 * i) / 4 + 31;
    let k = (80 * l) / 2447;
    let day = l - (2447 * k) / 80;
    l = k / 11;
    let month = k + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;
    (year as i32, month as u8, day as u8)
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::from_f64(jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_j2000_from_calendar() {
        let jd = JulianDate::from_calendar(2000, 1, 1, 12, 0, 0.0);
        assert_eq!(jd.to_f64(), J2000_JD);
        assert_eq!(jd.jd1(), 2451544.5);
        assert_eq!(jd.jd2(), 0.5);
    }

    #[test]
    fn test_arithmetic() {
        let jd = JulianDate::j2000();
        assert_eq!(jd.add_days(1.0).to_f64(), 2451546.0);
        assert!((jd.add_seconds(3600.0).days_since(&jd) - 1.0 / 24.0).abs() < 1e-15);
    }

    #[test]
    fn test_to_calendar_round_trip() {
        let jd = JulianDate::from_calendar(2010, 9, 10, 12, 34, 56.789);
        let cal = jd.to_calendar().unwrap();
        assert_eq!((cal.year, cal.month, cal.day), (2010, 9, 10));
        assert_eq!((cal.hour(), cal.minute(), cal.second()), (12, 34, 56));
        assert_eq!(cal.millisecond(), 789);
    }

    #[test]
    fn test_to_calendar_from_single_part() {
        let cal = JulianDate::from_f64(J2000_JD).to_calendar().unwrap();
        assert_eq!((cal.year, cal.month, cal.day, cal.hour()), (2000, 1, 1, 12));

        let cal = JulianDate::from_f64(2451544.5).to_calendar().unwrap();
        assert_eq!((cal.year, cal.month, cal.day, cal.hour()), (2000, 1, 1, 0));
    }

    #[test]
    fn test_to_calendar_rounding_carries_into_next_day() {
        let jd = JulianDate::from_calendar(2012, 2, 28, 23, 59, 59.9999);
        let cal = jd.to_calendar().unwrap();
        assert_eq!((cal.year, cal.month, cal.day), (2012, 2, 29));
        assert_eq!(cal.millisecond_of_day, 0);
    }

    #[test]
    fn test_to_calendar_rejects_nan() {
        assert!(JulianDate::new(f64::NAN, 0.0).to_calendar().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_keeps_both_parts() {
        let original = JulianDate::new(2451545.5, 0.123456789);
        let json = serde_json::to_string(&original).unwrap();
        let back: JulianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(original, back);
    }
}
