//! Three-component Cartesian vectors.
//!
//! The heliographic, heliocentric and ICRS frames all meet as unit or scaled
//! vectors before they are turned back into angles. [`Vector3`] is the common
//! currency for that.
//!
//! Spherical conversions use the usual astronomical convention: the azimuth is
//! measured from +X toward +Y and the elevation from the XY plane toward +Z.
//!
//! ```
//! use celestial_core::Vector3;
//!
//! let pole = Vector3::from_spherical(0.0, std::f64::consts::FRAC_PI_2);
//! assert!((pole.z - 1.0).abs() < 1e-15);
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub const fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.dot(self))
    }

    /// Returns the unit vector in the same direction.
    ///
    /// The zero vector is returned unchanged.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            *self
        } else {
            *self / mag
        }
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Unit vector from an azimuth and elevation in radians.
    pub fn from_spherical(azimuth: f64, elevation: f64) -> Self {
        let (sin_az, cos_az) = libm::sincos(azimuth);
        let (sin_el, cos_el) = libm::sincos(elevation);
        Self::new(cos_el * cos_az, cos_el * sin_az, sin_el)
    }

    /// Returns `(azimuth, elevation)` in radians, azimuth in (-pi, pi].
    ///
    /// Magnitude is ignored. The zero vector maps to `(0, 0)`.
    pub fn to_spherical(&self) -> (f64, f64) {
        let d2 = self.x * self.x + self.y * self.y;
        let azimuth = if d2 == 0.0 {
            0.0
        } else {
            libm::atan2(self.y, self.x)
        };
        let elevation = if self.z == 0.0 {
            0.0
        } else {
            libm::atan2(self.z, libm::sqrt(d2))
        };
        (azimuth, elevation)
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }
}

impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, k: f64) -> Self {
        Self::new(self.x / k, self.y / k, self.z / k)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.9}, {:.9}, {:.9}]", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_normalize() {
        let v = Vector3::new(3.0, 4.0, 0.0).normalize();
        assert!((v.magnitude() - 1.0).abs() < 1e-15);
        assert_eq!(Vector3::zeros().normalize(), Vector3::zeros());
    }

    #[test]
    fn test_cross_is_right_handed() {
        assert_eq!(Vector3::x_axis().cross(&Vector3::y_axis()), Vector3::z_axis());
        assert_eq!(Vector3::y_axis().cross(&Vector3::z_axis()), Vector3::x_axis());
    }

    #[test]
    fn test_spherical_round_trip() {
        let v = Vector3::from_spherical(2.0, -0.4);
        let (az, el) = v.to_spherical();
        assert!((az - 2.0).abs() < 1e-14);
        assert!((el + 0.4).abs() < 1e-14);

        let (_, el) = (Vector3::z_axis() * 5.0).to_spherical();
        assert_eq!(el, FRAC_PI_2);
    }

    #[test]
    fn test_ops() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(&b), 32.0);
        assert_eq!(a + b - b, a);
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a / 1.0, Vector3::new(-1.0, -2.0, -3.0));
        assert!(!Vector3::new(f64::NAN, 0.0, 0.0).is_finite());
    }
}
