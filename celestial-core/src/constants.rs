pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

/// Astronomical Unit in kilometers (derived from IAU 2012 definition)
pub const AU_KM: f64 = 149_597_870.7;

#[allow(clippy::excessive_precision)]
pub const J2000_OBLIQUITY_RAD: f64 = (23.0 + 26.0 / 60.0 + 21.41136 / 3600.0) * PI / 180.0;
