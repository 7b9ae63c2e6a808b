use celestial_core::Angle;

use crate::coordinate::{IntermediateCoord, PixelCoord};
use crate::error::{WcsError, WcsResult};
use crate::header::KeywordProvider;
use crate::linear::LinearTransform;
use crate::projection::{Projection, TangentPlane};

/// Angular unit of a `CUNITi` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Arcsec,
    Deg,
    Rad,
}

impl AngleUnit {
    pub fn from_cunit(keyword: &str, value: &str) -> WcsResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "arcsec" | "arcsecs" => Ok(Self::Arcsec),
            "deg" | "degree" | "degrees" => Ok(Self::Deg),
            "rad" | "radian" | "radians" => Ok(Self::Rad),
            other => Err(WcsError::invalid_keyword(
                keyword,
                format!("unknown angular unit '{}'", other),
            )),
        }
    }

    pub fn to_angle(self, value: f64) -> Angle {
        match self {
            Self::Arcsec => Angle::from_arcseconds(value),
            Self::Deg => Angle::from_degrees(value),
            Self::Rad => Angle::from_radians(value),
        }
    }

    pub fn value_of(self, angle: Angle) -> f64 {
        match self {
            Self::Arcsec => angle.arcseconds(),
            Self::Deg => angle.degrees(),
            Self::Rad => angle.radians(),
        }
    }
}

/// Celestial WCS for a helioprojective image.
///
/// World coordinates are helioprojective longitude and latitude (Tx, Ty).
/// Header values are read in their own `CUNITi` units and carried as
/// [`Angle`]s from there on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wcs {
    linear: LinearTransform,
    crval: [Angle; 2],
    cdelt: [f64; 2],
    units: [AngleUnit; 2],
    projection: Projection,
    plane: TangentPlane,
}

impl Wcs {
    pub fn new(
        linear: LinearTransform,
        crval: [Angle; 2],
        cdelt: [f64; 2],
        units: [AngleUnit; 2],
        projection: Projection,
    ) -> Self {
        Self {
            linear,
            crval,
            cdelt,
            units,
            projection,
            plane: TangentPlane::new(crval[0], crval[1]),
        }
    }

    /// Reads `CRPIXi`, `CRVALi`, `CDELTi`, optional `CUNITi` (default
    /// arcsec), optional `CTYPE1` (default TAN) and optional `PCi_j`.
    pub fn from_header(header: &impl KeywordProvider) -> WcsResult<Self> {
        let crpix = [header.require_float("crpix1")?, header.require_float("crpix2")?];
        let cdelt = [header.require_float("cdelt1")?, header.require_float("cdelt2")?];

        let mut units = [AngleUnit::default(); 2];
        for (i, unit) in units.iter_mut().enumerate() {
            let key = format!("cunit{}", i + 1);
            if let Some(value) = header.get_string(&key) {
                *unit = AngleUnit::from_cunit(&key, &value)?;
            }
        }

        let crval = [
            units[0].to_angle(header.require_float("crval1")?),
            units[1].to_angle(header.require_float("crval2")?),
        ];

        let projection = match header.get_string("ctype1") {
            Some(ctype) => Projection::from_ctype(&ctype)?,
            None => Projection::Tan,
        };

        let pc = [
            [
                header.get_float("pc1_1").unwrap_or(1.0),
                header.get_float("pc1_2").unwrap_or(0.0),
            ],
            [
                header.get_float("pc2_1").unwrap_or(0.0),
                header.get_float("pc2_2").unwrap_or(1.0),
            ],
        ];
        let linear = LinearTransform::from_pc_cdelt(crpix, pc, cdelt)?;

        Ok(Self::new(linear, crval, cdelt, units, projection))
    }

    pub fn pixel_to_world(&self, pixel: PixelCoord) -> (Angle, Angle) {
        let inter = self.linear.pixel_to_intermediate(pixel);
        let x = self.units[0].to_angle(inter.x());
        let y = self.units[1].to_angle(inter.y());
        match self.projection {
            Projection::Tan => self.plane.deproject(x.radians(), y.radians()),
            Projection::Car => (self.crval[0] + x, self.crval[1] + y),
        }
    }

    /// Pixel position of a sky direction, or `None` when the direction cannot
    /// be projected.
    pub fn world_to_pixel(&self, tx: Angle, ty: Angle) -> Option<PixelCoord> {
        let (x, y) = match self.projection {
            Projection::Tan => {
                let (xi, eta) = self.plane.project(tx, ty)?;
                (Angle::from_radians(xi), Angle::from_radians(eta))
            }
            Projection::Car => (tx - self.crval[0], ty - self.crval[1]),
        };
        let inter = IntermediateCoord::new(self.units[0].value_of(x), self.units[1].value_of(y));
        let pixel = self.linear.intermediate_to_pixel(inter);
        pixel.is_finite().then_some(pixel)
    }

    #[inline]
    pub fn crpix(&self) -> [f64; 2] {
        self.linear.crpix()
    }

    #[inline]
    pub fn crval(&self) -> (Angle, Angle) {
        (self.crval[0], self.crval[1])
    }

    /// Per-axis pixel size.
    pub fn scale(&self) -> (Angle, Angle) {
        (
            self.units[0].to_angle(self.cdelt[0]).abs(),
            self.units[1].to_angle(self.cdelt[1]).abs(),
        )
    }

    #[inline]
    pub fn units(&self) -> [AngleUnit; 2] {
        self.units
    }

    #[inline]
    pub fn projection_code(&self) -> &'static str {
        self.projection.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::KeywordMap;

    fn full_disk_header() -> KeywordMap {
        let mut map = KeywordMap::new();
        map.set_float("crpix1", 32.5)
            .set_float("crpix2", 32.5)
            .set_float("crval1", 0.0)
            .set_float("crval2", 0.0)
            .set_float("cdelt1", 40.0)
            .set_float("cdelt2", 40.0)
            .set_string("cunit1", "arcsec")
            .set_string("cunit2", "arcsec")
            .set_string("ctype1", "HPLN-TAN")
            .set_string("ctype2", "HPLT-TAN");
        map
    }

    #[test]
    fn test_from_header_defaults() {
        let mut map = full_disk_header();
        map.remove("cunit1");
        map.remove("ctype1");
        let wcs = Wcs::from_header(&map).unwrap();
        assert_eq!(wcs.units(), [AngleUnit::Arcsec, AngleUnit::Arcsec]);
        assert_eq!(wcs.projection_code(), "TAN");
        assert_eq!(wcs.crpix(), [32.5, 32.5]);
    }

    #[test]
    fn test_missing_keyword() {
        let mut map = full_disk_header();
        map.remove("cdelt2");
        assert!(matches!(
            Wcs::from_header(&map),
            Err(WcsError::MissingKeyword { .. })
        ));
    }

    #[test]
    fn test_bad_unit() {
        let mut map = full_disk_header();
        map.set_string("cunit2", "furlong");
        assert!(matches!(
            Wcs::from_header(&map),
            Err(WcsError::InvalidKeyword { .. })
        ));
    }

    #[test]
    fn test_reference_pixel_is_crval() {
        let mut map = full_disk_header();
        map.set_float("crval1", 150.0).set_float("crval2", -75.0);
        let wcs = Wcs::from_header(&map).unwrap();
        let (tx, ty) = wcs.pixel_to_world(PixelCoord::new(31.5, 31.5));
        assert!((tx.arcseconds() - 150.0).abs() < 1e-9);
        assert!((ty.arcseconds() + 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_corner_pixel_close_to_linear() {
        let wcs = Wcs::from_header(&full_disk_header()).unwrap();
        let (tx, ty) = wcs.pixel_to_world(PixelCoord::new(0.0, 63.0));
        assert!((tx.arcseconds() + 1260.0).abs() < 0.1, "tx = {}", tx.arcseconds());
        assert!((ty.arcseconds() - 1260.0).abs() < 0.1, "ty = {}", ty.arcseconds());
    }

    #[test]
    fn test_world_pixel_round_trip() {
        let wcs = Wcs::from_header(&full_disk_header()).unwrap();
        for &(x, y) in &[(0.0, 0.0), (12.0, 50.0), (63.0, 7.5)] {
            let (tx, ty) = wcs.pixel_to_world(PixelCoord::new(x, y));
            let back = wcs.world_to_pixel(tx, ty).unwrap();
            assert!((back.x() - x).abs() < 1e-8);
            assert!((back.y() - y).abs() < 1e-8);
        }
    }

    #[test]
    fn test_degree_units_and_car() {
        let mut map = full_disk_header();
        map.set_string("cunit1", "deg")
            .set_string("cunit2", "deg")
            .set_float("cdelt1", 0.01)
            .set_float("cdelt2", 0.01)
            .set_string("ctype1", "HPLN-CAR");
        let wcs = Wcs::from_header(&map).unwrap();
        let (sx, sy) = wcs.scale();
        assert!((sx.arcseconds() - 36.0).abs() < 1e-9);
        assert!((sy.arcseconds() - 36.0).abs() < 1e-9);

        let (tx, _) = wcs.pixel_to_world(PixelCoord::new(41.5, 31.5));
        assert!((tx.degrees() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_far_hemisphere_has_no_pixel() {
        let wcs = Wcs::from_header(&full_disk_header()).unwrap();
        assert!(wcs
            .world_to_pixel(Angle::from_degrees(100.0), Angle::ZERO)
            .is_none());
    }
}
