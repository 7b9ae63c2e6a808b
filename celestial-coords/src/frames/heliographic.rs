use crate::{solar, CoordError, CoordResult, Distance};
use celestial_core::{Angle, Vector3};
use celestial_time::TT;

/// A position in the heliographic Stonyhurst frame.
///
/// Longitude is kept in [0°, 360°) and latitude in [-90°, +90°]. The frame
/// itself is time dependent; the time lives with the coordinate that owns
/// this position, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeliographicStonyhurst {
    latitude: Angle,
    longitude: Angle,
    radius: Distance,
}

impl HeliographicStonyhurst {
    /// A point on the photosphere.
    pub fn new(latitude: Angle, longitude: Angle) -> CoordResult<Self> {
        Self::with_radius(latitude, longitude, Distance::SOLAR_RADIUS)
    }

    pub fn with_radius(latitude: Angle, longitude: Angle, radius: Distance) -> CoordResult<Self> {
        let latitude = latitude.validate_latitude()?;
        let longitude = longitude.validate_longitude(true)?;

        Ok(Self {
            latitude,
            longitude,
            radius,
        })
    }

    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> CoordResult<Self> {
        Self::new(Angle::from_degrees(lat_deg), Angle::from_degrees(lon_deg))
    }

    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    pub fn longitude(&self) -> Angle {
        self.longitude
    }

    pub fn radius(&self) -> Distance {
        self.radius
    }

    /// Longitude in (-180°, 180°], the form used for limb and visibility tests.
    pub fn signed_longitude(&self) -> Angle {
        let lon = self.longitude.wrapped_signed();
        if lon.degrees() <= -180.0 {
            lon + Angle::from_degrees(360.0)
        } else {
            lon
        }
    }

    /// Same radius and latitude, longitude advanced by `delta` and rewrapped.
    pub fn shifted_longitude(&self, delta: Angle) -> Self {
        Self {
            longitude: (self.longitude + delta).wrapped(),
            ..*self
        }
    }

    /// Sun-centred Cartesian position in km.
    pub fn to_cartesian(&self) -> Vector3 {
        Vector3::from_spherical(self.longitude.radians(), self.latitude.radians())
            * self.radius.km()
    }

    /// Inverse of [`to_cartesian`](Self::to_cartesian). Fails at Sun centre.
    pub fn from_cartesian(v: Vector3) -> CoordResult<Self> {
        if !v.is_finite() {
            return Err(CoordError::invalid_coordinate(format!(
                "non-finite heliographic vector {}",
                v
            )));
        }
        let radius = Distance::from_km(v.magnitude())?;
        let (lon, lat) = v.to_spherical();
        Self::with_radius(Angle::from_radians(lat), Angle::from_radians(lon), radius)
    }

    /// The same physical point expressed in the frame at `to`.
    pub fn reframe(&self, from: &TT, to: &TT) -> CoordResult<Self> {
        if from == to {
            return Ok(*self);
        }
        let m = solar::heliographic_reframe(from, to);
        Self::from_cartesian(m * self.to_cartesian())
    }
}

impl std::fmt::Display for HeliographicStonyhurst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HeliographicStonyhurst(lat={:.6}°, lon={:.6}°, r={})",
            self.latitude.degrees(),
            self.longitude.degrees(),
            self.radius
        )
    }
}
