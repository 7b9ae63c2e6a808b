//! Low-precision solar ephemeris and the heliographic axes.
//!
//! The Sun's geometric position follows the Meeus (1998, ch. 25) series,
//! good to about 0.01°. That is far tighter than the rotation laws it feeds.
//!
//! The heliographic Stonyhurst frame at time `t` has:
//!
//! - Z along the solar rotation axis (IAU pole, RA 286.13°, Dec 63.87°),
//! - X along the projection of the Sun-to-Earth direction onto the solar
//!   equator,
//! - Y completing the right-handed set.
//!
//! [`heliographic_axes`] returns the matrix with those axes as rows, which
//! maps ICRS vectors into the frame.

use crate::constants::{
    EARTH_SEMI_MAJOR_AXIS_AU, PRECESSION_DEG_PER_CENTURY, SOLAR_POLE_DEC_DEG, SOLAR_POLE_RA_DEG,
};
use celestial_core::constants::{DEG_TO_RAD, J2000_OBLIQUITY_RAD};
use celestial_core::{Angle, RotationMatrix3, Vector3};
use celestial_time::TT;

struct SolarElements {
    /// True geometric longitude, mean equinox of date, degrees.
    true_longitude: f64,
    true_anomaly: f64,
    eccentricity: f64,
}

fn solar_elements(t: f64) -> SolarElements {
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = 357.52911 + 35999.05029 * t - 0.0001537 * t * t;
    let m_rad = m * DEG_TO_RAD;
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;

    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * libm::sin(m_rad)
        + (0.019993 - 0.000101 * t) * libm::sin(2.0 * m_rad)
        + 0.000289 * libm::sin(3.0 * m_rad);

    SolarElements {
        true_longitude: l0 + c,
        true_anomaly: (m + c) * DEG_TO_RAD,
        eccentricity: e,
    }
}

/// Sun-Earth distance in AU.
pub fn sun_earth_distance_au(epoch: &TT) -> f64 {
    let el = solar_elements(epoch.centuries_since_j2000());
    let e = el.eccentricity;
    EARTH_SEMI_MAJOR_AXIS_AU * (1.0 - e * e) / (1.0 + e * libm::cos(el.true_anomaly))
}

/// Unit vector from Earth to Sun in ICRS (J2000 equator and equinox).
pub fn earth_to_sun_icrs(epoch: &TT) -> Vector3 {
    let t = epoch.centuries_since_j2000();
    let el = solar_elements(t);
    let lambda = (el.true_longitude - PRECESSION_DEG_PER_CENTURY * t) * DEG_TO_RAD;

    let (sin_l, cos_l) = libm::sincos(lambda);
    let (sin_e, cos_e) = libm::sincos(J2000_OBLIQUITY_RAD);
    Vector3::new(cos_l, cos_e * sin_l, sin_e * sin_l)
}

/// Unit vector along the solar rotation axis in ICRS.
pub fn solar_pole_icrs() -> Vector3 {
    Vector3::from_spherical(
        SOLAR_POLE_RA_DEG * DEG_TO_RAD,
        SOLAR_POLE_DEC_DEG * DEG_TO_RAD,
    )
}

/// Rows are the heliographic Stonyhurst X, Y, Z axes in ICRS.
pub fn heliographic_axes(epoch: &TT) -> RotationMatrix3 {
    let pole = solar_pole_icrs();
    let earth = -earth_to_sun_icrs(epoch);
    let x = (earth - pole * earth.dot(&pole)).normalize();
    let y = pole.cross(&x);
    RotationMatrix3::from_rows(x, y, pole)
}

/// Rotation taking heliographic vectors at `from` to heliographic vectors at `to`.
pub fn heliographic_reframe(from: &TT, to: &TT) -> RotationMatrix3 {
    heliographic_axes(to) * heliographic_axes(from).transpose()
}

/// Heliographic latitude of the Earth (B0 angle).
pub fn earth_b0(epoch: &TT) -> Angle {
    let earth = -earth_to_sun_icrs(epoch);
    Angle::from_radians(libm::asin(earth.dot(&solar_pole_icrs())))
}
