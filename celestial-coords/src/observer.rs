//! Observers of the Sun.
//!
//! An [`Observer`] is a heliographic Stonyhurst position plus the time of the
//! observation. The helioprojective frame is defined relative to one.
//!
//! ```
//! use celestial_coords::Observer;
//! use celestial_time::TT;
//!
//! let t: TT = "2010-09-10T12:00:00".parse().unwrap();
//! let earth = Observer::earth(&t).unwrap();
//! assert!(earth.validate().is_ok());
//! assert!((earth.angular_radius().arcseconds() - 954.0).abs() < 2.0);
//! ```

use crate::constants::RSUN_KM;
use crate::coordinate::SolarCoordinate;
use crate::{solar, CoordError, CoordResult, Distance, HeliographicStonyhurst};
use celestial_core::Angle;
use celestial_time::TT;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observer {
    position: HeliographicStonyhurst,
    obstime: TT,
}

impl Observer {
    pub fn new(position: HeliographicStonyhurst, obstime: TT) -> Self {
        Self { position, obstime }
    }

    /// Earth centre at `obstime`: longitude 0°, latitude B0.
    pub fn earth(obstime: &TT) -> CoordResult<Self> {
        let b0 = solar::earth_b0(obstime);
        let distance = Distance::from_au(solar::sun_earth_distance_au(obstime))?;
        let position = HeliographicStonyhurst::with_radius(b0, Angle::ZERO, distance)?;
        Ok(Self::new(position, *obstime))
    }

    /// Builds an observer from header-style values (degrees and metres).
    pub fn from_header_values(
        longitude_deg: f64,
        latitude_deg: f64,
        distance_m: f64,
        obstime: TT,
    ) -> CoordResult<Self> {
        let position = HeliographicStonyhurst::with_radius(
            Angle::from_degrees(latitude_deg),
            Angle::from_degrees(longitude_deg),
            Distance::from_meters(distance_m)?,
        )?;
        Ok(Self::new(position, obstime))
    }

    pub fn position(&self) -> &HeliographicStonyhurst {
        &self.position
    }

    pub fn obstime(&self) -> &TT {
        &self.obstime
    }

    pub fn longitude(&self) -> Angle {
        self.position.longitude()
    }

    pub fn latitude(&self) -> Angle {
        self.position.latitude()
    }

    pub fn distance(&self) -> Distance {
        self.position.radius()
    }

    /// Apparent angular radius of the photosphere.
    pub fn angular_radius(&self) -> Angle {
        Angle::from_radians(libm::asin(RSUN_KM / self.distance().km()))
    }

    /// The same observer described at another time, holding its heliographic
    /// position fixed.
    pub fn at(&self, obstime: TT) -> Self {
        Self::new(self.position, obstime)
    }

    /// Checks the observer can see the Sun: a finite time and a position
    /// outside the photosphere.
    pub fn validate(&self) -> CoordResult<()> {
        if !self.obstime.is_finite() {
            return Err(CoordError::invalid_observer("observation time is not finite"));
        }
        let p = &self.position;
        if !p.latitude().is_finite() || !p.longitude().is_finite() {
            return Err(CoordError::invalid_observer(format!(
                "non-finite observer position {}",
                p
            )));
        }
        if p.radius().km() <= RSUN_KM {
            return Err(CoordError::invalid_observer(format!(
                "observer at {} is not outside the Sun",
                p.radius()
            )));
        }
        Ok(())
    }
}

impl TryFrom<SolarCoordinate> for Observer {
    type Error = CoordError;

    /// Only heliographic coordinates describe an observer location.
    fn try_from(coordinate: SolarCoordinate) -> CoordResult<Self> {
        match coordinate {
            SolarCoordinate::Heliographic { position, obstime } => {
                let observer = Observer::new(position, obstime);
                observer.validate()?;
                Ok(observer)
            }
            SolarCoordinate::Helioprojective { .. } => Err(CoordError::invalid_observer(
                "a helioprojective coordinate does not locate an observer",
            )),
        }
    }
}

impl std::fmt::Display for Observer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({} at {})", self.position, self.obstime)
    }
}
