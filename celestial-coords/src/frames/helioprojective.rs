//! Helioprojective (Tx, Ty) coordinates and the heliocentric-Cartesian bridge.
//!
//! Conversions go through observer-centred heliocentric Cartesian (HCC)
//! coordinates: Z toward the observer, Y toward solar north projected on the
//! sky, X completing the right-handed set. For an observer at heliographic
//! (L0, B0, D0):
//!
//! ```text
//! x = r cos(lat) sin(lon - L0)
//! y = r [sin(lat) cos(B0) - cos(lat) cos(lon - L0) sin(B0)]
//! z = r [sin(lat) sin(B0) + cos(lat) cos(lon - L0) cos(B0)]
//!
//! Tx = atan2(x, D0 - z)        Ty = asin(y / d)
//! ```
//!
//! where `d` is the observer-to-point distance. Going back without a known
//! distance intersects the line of sight with the photosphere and keeps the
//! near-side hit; lines of sight that miss the Sun have no heliographic
//! position.

use crate::constants::RSUN_KM;
use crate::{CoordResult, Distance, HeliographicStonyhurst, Observer};
use celestial_core::{Angle, Vector3};

/// Angular position on the observer's sky, with the line-of-sight distance
/// when it is known.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Helioprojective {
    tx: Angle,
    ty: Angle,
    distance: Option<Distance>,
}

impl Helioprojective {
    pub fn new(tx: Angle, ty: Angle) -> Self {
        Self {
            tx,
            ty,
            distance: None,
        }
    }

    pub fn with_distance(tx: Angle, ty: Angle, distance: Distance) -> Self {
        Self {
            tx,
            ty,
            distance: Some(distance),
        }
    }

    pub fn from_arcseconds(tx: f64, ty: f64) -> Self {
        Self::new(Angle::from_arcseconds(tx), Angle::from_arcseconds(ty))
    }

    pub fn tx(&self) -> Angle {
        self.tx
    }

    pub fn ty(&self) -> Angle {
        self.ty
    }

    pub fn distance(&self) -> Option<Distance> {
        self.distance
    }

    pub fn tx_ty_arcsec(&self) -> (f64, f64) {
        (self.tx.arcseconds(), self.ty.arcseconds())
    }

    /// Angular distance from disk centre, in the small-angle sense used for
    /// radial pixel measures.
    pub fn radial_angle(&self) -> Angle {
        Angle::from_radians(libm::hypot(self.tx.radians(), self.ty.radians()))
    }

    /// Projects a heliographic position, expressed in the frame at the
    /// observer's time, onto the observer's sky.
    pub fn from_heliographic(
        position: &HeliographicStonyhurst,
        observer: &Observer,
    ) -> CoordResult<Self> {
        let hcc = heliographic_to_hcc(position, observer);
        let zeta = observer.distance().km() - hcc.z;
        let d = libm::sqrt(hcc.x * hcc.x + hcc.y * hcc.y + zeta * zeta);
        let tx = Angle::from_radians(libm::atan2(hcc.x, zeta));
        let ty = Angle::from_radians(libm::asin(hcc.y / d));
        Ok(Self::with_distance(tx, ty, Distance::from_km(d)?))
    }

    /// Heliographic position in the frame at the observer's time, or `None`
    /// when the line of sight misses the photosphere.
    pub fn to_heliographic(&self, observer: &Observer) -> Option<HeliographicStonyhurst> {
        let d0 = observer.distance().km();
        let (sin_tx, cos_tx) = self.tx.sin_cos();
        let (sin_ty, cos_ty) = self.ty.sin_cos();

        let d = match self.distance {
            Some(distance) => distance.km(),
            None => {
                let b = -2.0 * d0 * cos_ty * cos_tx;
                let c = d0 * d0 - RSUN_KM * RSUN_KM;
                let discriminant = b * b - 4.0 * c;
                if discriminant.is_nan() || discriminant < 0.0 {
                    return None;
                }
                (-b - libm::sqrt(discriminant)) / 2.0
            }
        };

        let hcc = Vector3::new(d * cos_ty * sin_tx, d * sin_ty, d0 - d * cos_ty * cos_tx);
        hcc_to_heliographic(&hcc, observer)
    }
}

fn heliographic_to_hcc(position: &HeliographicStonyhurst, observer: &Observer) -> Vector3 {
    let r = position.radius().km();
    let (sin_lat, cos_lat) = position.latitude().sin_cos();
    let (sin_dlon, cos_dlon) = (position.longitude() - observer.longitude()).sin_cos();
    let (sin_b0, cos_b0) = observer.latitude().sin_cos();

    Vector3::new(
        r * cos_lat * sin_dlon,
        r * (sin_lat * cos_b0 - cos_lat * cos_dlon * sin_b0),
        r * (sin_lat * sin_b0 + cos_lat * cos_dlon * cos_b0),
    )
}

fn hcc_to_heliographic(hcc: &Vector3, observer: &Observer) -> Option<HeliographicStonyhurst> {
    let r = hcc.magnitude();
    let (sin_b0, cos_b0) = observer.latitude().sin_cos();

    let lat = libm::asin((hcc.y * cos_b0 + hcc.z * sin_b0) / r);
    let lon = observer.longitude().radians() + libm::atan2(hcc.x, hcc.z * cos_b0 - hcc.y * sin_b0);

    let radius = Distance::from_km(r).ok()?;
    HeliographicStonyhurst::with_radius(Angle::from_radians(lat), Angle::from_radians(lon), radius)
        .ok()
}

impl std::fmt::Display for Helioprojective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Helioprojective(Tx={:.3}\", Ty={:.3}\"",
            self.tx.arcseconds(),
            self.ty.arcseconds()
        )?;
        if let Some(d) = self.distance {
            write!(f, ", d={}", d)?;
        }
        write!(f, ")")
    }
}
