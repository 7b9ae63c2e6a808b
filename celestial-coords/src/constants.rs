/// Nominal solar radius (IAU 2015 Resolution B3), km.
pub const RSUN_KM: f64 = 695_700.0;

/// Right ascension of the solar north pole (ICRS), degrees.
pub const SOLAR_POLE_RA_DEG: f64 = 286.13;

/// Declination of the solar north pole (ICRS), degrees.
pub const SOLAR_POLE_DEC_DEG: f64 = 63.87;

/// Mean semi-major axis of the Earth's orbit, AU.
pub(crate) const EARTH_SEMI_MAJOR_AXIS_AU: f64 = 1.000001018;

/// General precession in longitude, degrees per Julian century.
pub(crate) const PRECESSION_DEG_PER_CENTURY: f64 = 1.397;
