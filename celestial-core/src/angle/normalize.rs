//! Angle wrapping for longitude-like quantities.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Heliographic longitude | [0, 2pi) | [`wrap_0_2pi`] |
//! | Longitude differences, helioprojective Tx | [-pi, +pi) | [`wrap_pm_pi`] |
//!
//! Latitude-like quantities are never wrapped or clamped here. A latitude
//! beyond the poles means the geometry upstream is wrong, and the frame layer
//! reports it as an undefined point instead of saturating it.
//!
//! Both functions go through [`crate::math::fmod`] because `%` on floats is a
//! remainder that keeps the sign of the dividend.
//!
//! ```
//! use celestial_core::angle::{wrap_0_2pi, wrap_pm_pi};
//! use std::f64::consts::PI;
//!
//! let lon = wrap_0_2pi(-0.5);
//! assert!(lon > 0.0 && lon < 2.0 * PI);
//!
//! let dlon = wrap_pm_pi(3.5);
//! assert!(dlon >= -PI && dlon < PI);
//! ```

use crate::constants::{PI, TWOPI};
use crate::math::fmod;

/// Wraps an angle to [-pi, +pi) radians.
///
/// ```
/// use celestial_core::angle::wrap_pm_pi;
/// use std::f64::consts::PI;
///
/// let x = wrap_pm_pi(3.0 * PI / 2.0);
/// assert!((x - (-PI / 2.0)).abs() < 1e-10);
/// ```
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w >= PI {
        w - TWOPI
    } else if w < -PI {
        w + TWOPI
    } else {
        w
    }
}

/// Wraps an angle to [0, 2pi) radians.
///
/// The upper bound is exclusive even for tiny negative inputs, whose naive
/// wrap would round to exactly 2pi.
///
/// ```
/// use celestial_core::angle::wrap_0_2pi;
/// use std::f64::consts::PI;
///
/// let x = wrap_0_2pi(-PI / 2.0);
/// assert!((x - 3.0 * PI / 2.0).abs() < 1e-10);
/// ```
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w < 0.0 {
        let shifted = w + TWOPI;
        if shifted >= TWOPI {
            0.0
        } else {
            shifted
        }
    } else {
        w
    }
}
