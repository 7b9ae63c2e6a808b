//! Range checks for heliographic coordinates.
//!
//! Heliographic latitude must lie in [-90°, +90°]. Heliographic longitude is
//! either accepted in [-180°, +180°] or wrapped to [0°, 360°) on request.

use super::core::Angle;
use super::normalize::wrap_0_2pi;
use crate::constants::{HALF_PI, PI};
use crate::{AstroError, MathErrorKind};

fn require_finite(angle: Angle, operation: &str) -> Result<f64, AstroError> {
    let rad = angle.radians();
    if rad.is_finite() {
        Ok(rad)
    } else {
        Err(AstroError::math_error(
            operation,
            MathErrorKind::NotFinite,
            &format!("{} is not finite", angle),
        ))
    }
}

pub fn validate_latitude(angle: Angle) -> Result<Angle, AstroError> {
    let rad = require_finite(angle, "validate_latitude")?;
    if (-HALF_PI..=HALF_PI).contains(&rad) {
        return Ok(angle);
    }

    Err(AstroError::math_error(
        "validate_latitude",
        MathErrorKind::OutOfRange,
        &format!("latitude {:.4}° outside [-90°, +90°]", angle.degrees()),
    ))
}

/// Validates a longitude.
///
/// With `normalize` the angle is wrapped to [0°, 360°) and only non-finite
/// input fails.
pub fn validate_longitude(angle: Angle, normalize: bool) -> Result<Angle, AstroError> {
    let rad = require_finite(angle, "validate_longitude")?;
    if normalize {
        return Ok(Angle::from_radians(wrap_0_2pi(rad)));
    }

    if (-PI..=PI).contains(&rad) {
        return Ok(angle);
    }

    Err(AstroError::math_error(
        "validate_longitude",
        MathErrorKind::OutOfRange,
        &format!("longitude {:.4}° outside [-180°, +180°]", angle.degrees()),
    ))
}
