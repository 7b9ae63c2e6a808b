//! Radial distances from Sun centre.
//!
//! Everything heliocentric is measured in kilometres internally; headers give
//! observer distances in metres, ephemerides in AU, and surface points in
//! solar radii.
//!
//! ```
//! use celestial_coords::Distance;
//!
//! let earth = Distance::from_au(1.0).unwrap();
//! assert!((earth.solar_radii() - 215.03).abs() < 0.01);
//! assert!(Distance::from_km(-1.0).is_err());
//! ```

use crate::constants::RSUN_KM;
use crate::{CoordError, CoordResult};
use celestial_core::constants::AU_KM;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distance {
    km: f64,
}

impl Distance {
    /// Exactly one nominal solar radius.
    pub const SOLAR_RADIUS: Self = Self { km: RSUN_KM };

    pub fn from_km(km: f64) -> CoordResult<Self> {
        if !km.is_finite() || km <= 0.0 {
            return Err(CoordError::invalid_distance(format!(
                "Distance must be positive and finite, got {} km",
                km
            )));
        }
        Ok(Self { km })
    }

    pub fn from_meters(m: f64) -> CoordResult<Self> {
        Self::from_km(m / 1000.0)
    }

    pub fn from_au(au: f64) -> CoordResult<Self> {
        Self::from_km(au * AU_KM)
    }

    pub fn from_solar_radii(r: f64) -> CoordResult<Self> {
        Self::from_km(r * RSUN_KM)
    }

    pub fn km(self) -> f64 {
        self.km
    }

    pub fn meters(self) -> f64 {
        self.km * 1000.0
    }

    pub fn au(self) -> f64 {
        self.km / AU_KM
    }

    pub fn solar_radii(self) -> f64 {
        self.km / RSUN_KM
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.km < 10.0 * RSUN_KM {
            write!(f, "{:.6} Rsun", self.solar_radii())
        } else {
            write!(f, "{:.9} AU", self.au())
        }
    }
}
