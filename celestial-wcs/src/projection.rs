//! Sky projections for helioprojective images.
//!
//! Helioprojective longitude/latitude (Tx, Ty) are treated as a spherical
//! system whose pole is solar north as seen by the observer. A sky direction
//! is the unit vector `(cos Ty sin Tx, sin Ty, cos Ty cos Tx)`, so disk centre
//! lies along +Z.
//!
//! | Code | Projection |
//! |------|------------|
//! | `TAN` | gnomonic, tangent plane at the reference coordinate |
//! | `CAR` | plate carrée, Tx and Ty taken linearly |

use celestial_core::{Angle, Vector3};

use crate::error::{WcsError, WcsResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Tan,
    Car,
}

impl Projection {
    /// Parses the projection code from a `CTYPEi` value such as `HPLN-TAN`.
    pub fn from_ctype(ctype: &str) -> WcsResult<Self> {
        let code = ctype.trim().rsplit('-').next().unwrap_or_default();
        match code.to_ascii_uppercase().as_str() {
            "TAN" => Ok(Self::Tan),
            "CAR" => Ok(Self::Car),
            _ => Err(WcsError::unsupported_projection(ctype)),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Tan => "TAN",
            Self::Car => "CAR",
        }
    }
}

/// Tangent-plane basis at a reference sky direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TangentPlane {
    r0: Vector3,
    e_x: Vector3,
    e_y: Vector3,
}

pub(crate) fn sky_vector(tx: Angle, ty: Angle) -> Vector3 {
    let (sin_tx, cos_tx) = tx.sin_cos();
    let (sin_ty, cos_ty) = ty.sin_cos();
    Vector3::new(cos_ty * sin_tx, sin_ty, cos_ty * cos_tx)
}

pub(crate) fn sky_angles(v: &Vector3) -> (Angle, Angle) {
    let v = v.normalize();
    (
        Angle::from_radians(libm::atan2(v.x, v.z)),
        Angle::from_radians(libm::asin(v.y)),
    )
}

impl TangentPlane {
    pub(crate) fn new(crval1: Angle, crval2: Angle) -> Self {
        let (sin_a, cos_a) = crval1.sin_cos();
        let (sin_b, cos_b) = crval2.sin_cos();
        Self {
            r0: sky_vector(crval1, crval2),
            e_x: Vector3::new(cos_a, 0.0, -sin_a),
            e_y: Vector3::new(-sin_b * sin_a, cos_b, -sin_b * cos_a),
        }
    }

    /// Plane coordinates (radians) of a sky direction, or `None` for
    /// directions 90° or more from the tangent point.
    pub(crate) fn project(&self, tx: Angle, ty: Angle) -> Option<(f64, f64)> {
        let v = sky_vector(tx, ty);
        let den = v.dot(&self.r0);
        if den.is_nan() || den <= 0.0 {
            return None;
        }
        Some((v.dot(&self.e_x) / den, v.dot(&self.e_y) / den))
    }

    pub(crate) fn deproject(&self, xi: f64, eta: f64) -> (Angle, Angle) {
        sky_angles(&(self.r0 + self.e_x * xi + self.e_y * eta))
    }
}
