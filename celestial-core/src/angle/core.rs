//! Core angle type.
//!
//! [`Angle`] stores radians and converts to degrees and arcseconds on demand.
//! Solar work mixes all three: rotation rates come in microradians per second,
//! heliographic positions in degrees, and helioprojective positions and pixel
//! scales in arcseconds.
//!
//! ```
//! use celestial_core::Angle;
//!
//! let lat = Angle::from_degrees(30.0);
//! let tx = Angle::from_arcseconds(-570.0);
//!
//! assert!((lat.radians() - std::f64::consts::FRAC_PI_6).abs() < 1e-15);
//! assert!((tx.degrees() + 570.0 / 3600.0).abs() < 1e-15);
//! ```
//!
//! Angles are never wrapped implicitly. Use [`Angle::wrapped`] for longitudes
//! and [`Angle::wrapped_signed`] for differences.

use super::normalize::{wrap_0_2pi, wrap_pm_pi};
use crate::constants::{ARCSEC_PER_DEGREE, HALF_PI, PI};

/// An angular measurement stored as radians.
///
/// `Eq` and `Ord` are not implemented because the inner f64 can be NaN.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    pub const ZERO: Self = Self { rad: 0.0 };

    pub const PI: Self = Self { rad: PI };

    pub const HALF_PI: Self = Self { rad: HALF_PI };

    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Creates an angle from arcseconds (1/3600 of a degree).
    ///
    /// ```
    /// use celestial_core::Angle;
    ///
    /// let angle = Angle::from_arcseconds(3600.0);
    /// assert!((angle.degrees() - 1.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn from_arcseconds(arcsec: f64) -> Self {
        Self {
            rad: (arcsec / ARCSEC_PER_DEGREE).to_radians(),
        }
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    #[inline]
    pub fn arcseconds(self) -> f64 {
        self.degrees() * ARCSEC_PER_DEGREE
    }

    #[inline]
    pub fn sin(self) -> f64 {
        libm::sin(self.rad)
    }

    #[inline]
    pub fn cos(self) -> f64 {
        libm::cos(self.rad)
    }

    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        libm::sincos(self.rad)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::from_radians(self.rad.abs())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }

    /// Returns the equivalent angle in [0°, 360°).
    ///
    /// ```
    /// use celestial_core::Angle;
    ///
    /// let lon = Angle::from_degrees(-10.0).wrapped();
    /// assert!((lon.degrees() - 350.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn wrapped(self) -> Self {
        Self::from_radians(wrap_0_2pi(self.rad))
    }

    /// Returns the equivalent angle in [-180°, 180°).
    #[inline]
    pub fn wrapped_signed(self) -> Self {
        Self::from_radians(wrap_pm_pi(self.rad))
    }

    pub fn validate_latitude(self) -> Result<Self, crate::AstroError> {
        super::validate::validate_latitude(self)
    }

    pub fn validate_longitude(self, normalize: bool) -> Result<Self, crate::AstroError> {
        super::validate::validate_longitude(self, normalize)
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}

#[inline]
pub fn deg(value: f64) -> Angle {
    Angle::from_degrees(value)
}

#[inline]
pub fn rad(value: f64) -> Angle {
    Angle::from_radians(value)
}

#[inline]
pub fn arcsec(value: f64) -> Angle {
    Angle::from_arcseconds(value)
}
