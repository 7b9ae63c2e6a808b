//! Time spans and angular rates.
//!
//! Rotation laws are tabulated in microradians per second or degrees per day,
//! and elapsed times arrive in seconds or days. Keeping both behind types makes
//! `rate * duration` the only way to get an angle out of them.

use crate::constants::SECONDS_PER_DAY_F64;
use crate::Angle;
use std::ops::{Add, Mul, Neg, Sub};

/// A signed span of time, stored in seconds.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Duration {
    seconds: f64,
}

impl Duration {
    pub const ZERO: Self = Self { seconds: 0.0 };

    #[inline]
    pub const fn from_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    #[inline]
    pub fn from_days(days: f64) -> Self {
        Self {
            seconds: days * SECONDS_PER_DAY_F64,
        }
    }

    #[inline]
    pub fn seconds(self) -> f64 {
        self.seconds
    }

    #[inline]
    pub fn days(self) -> f64 {
        self.seconds / SECONDS_PER_DAY_F64
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.seconds.is_finite()
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_seconds(self.seconds + rhs.seconds)
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_seconds(self.seconds - rhs.seconds)
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_seconds(-self.seconds)
    }
}

impl Mul<f64> for Duration {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self::from_seconds(self.seconds * k)
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} s", self.seconds)
    }
}

/// An angular velocity, stored in radians per second.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AngularRate {
    rad_per_sec: f64,
}

impl AngularRate {
    pub const ZERO: Self = Self { rad_per_sec: 0.0 };

    #[inline]
    pub const fn from_radians_per_second(rad_per_sec: f64) -> Self {
        Self { rad_per_sec }
    }

    #[inline]
    pub fn from_microradians_per_second(urad_per_sec: f64) -> Self {
        Self::from_radians_per_second(urad_per_sec * 1e-6)
    }

    #[inline]
    pub fn from_degrees_per_day(deg_per_day: f64) -> Self {
        Self::from_radians_per_second(deg_per_day.to_radians() / SECONDS_PER_DAY_F64)
    }

    #[inline]
    pub fn microradians_per_second(self) -> f64 {
        self.rad_per_sec * 1e6
    }

    #[inline]
    pub fn degrees_per_day(self) -> f64 {
        (self.rad_per_sec * SECONDS_PER_DAY_F64).to_degrees()
    }
}

impl Add for AngularRate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_radians_per_second(self.rad_per_sec + rhs.rad_per_sec)
    }
}

impl Mul<f64> for AngularRate {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self::from_radians_per_second(self.rad_per_sec * k)
    }
}

impl Mul<Duration> for AngularRate {
    type Output = Angle;

    fn mul(self, dt: Duration) -> Angle {
        Angle::from_radians(self.rad_per_sec * dt.seconds())
    }
}

impl std::fmt::Display for AngularRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6} deg/day", self.degrees_per_day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_units() {
        let d = Duration::from_days(2.0);
        assert_eq!(d.seconds(), 172_800.0);
        assert_eq!(d.days(), 2.0);
        assert_eq!((-d).days(), -2.0);
        assert_eq!((d + d - d * 0.5).days(), 3.0);
    }

    #[test]
    fn test_microradian_rate_to_degrees_per_day() {
        // 2.894 urad/s is about 14.326 deg/day
        let r = AngularRate::from_microradians_per_second(2.894);
        assert!((r.degrees_per_day() - 14.3262).abs() < 1e-3);
        assert!((r.microradians_per_second() - 2.894).abs() < 1e-12);
    }

    #[test]
    fn test_rate_times_duration() {
        let a = AngularRate::from_degrees_per_day(14.44) * Duration::from_days(2.0);
        assert!((a.degrees() - 28.88).abs() < 1e-12);

        let back = AngularRate::from_degrees_per_day(-0.9856) * Duration::from_days(-1.0);
        assert!((back.degrees() - 0.9856).abs() < 1e-12);
    }

    #[test]
    fn test_rate_sum_and_scale() {
        let r = AngularRate::from_degrees_per_day(10.0) + AngularRate::from_degrees_per_day(4.0) * 0.5;
        assert!((r.degrees_per_day() - 12.0).abs() < 1e-12);
    }
}
