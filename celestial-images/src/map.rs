//! Solar image maps.
//!
//! A [`SolarMap`] is a row-major `f64` image plus the keyword metadata that
//! places it on the sky. Construction parses the metadata once: the WCS, the
//! observation time (`date-obs`, or the legacy `date_obs`) and the observer.
//! The observer comes from `hgln_obs`/`hglt_obs`/`dsun_obs` when all three are
//! present and is otherwise the Earth at the observation time.
//!
//! ```
//! use celestial_images::{Dimensions, SolarMap};
//! use celestial_wcs::{KeywordMap, KeywordProvider};
//!
//! let mut meta = KeywordMap::new();
//! meta.set_float("crpix1", 2.0).set_float("crpix2", 2.0)
//!     .set_float("crval1", 0.0).set_float("crval2", 0.0)
//!     .set_float("cdelt1", 600.0).set_float("cdelt2", 600.0)
//!     .set_string("date-obs", "2010-09-10T12:00:00");
//!
//! let map = SolarMap::new(vec![0.0; 9], Dimensions::new(3, 3), meta).unwrap();
//! assert_eq!(map.meta().get_int("naxis1"), Some(3));
//! ```

use celestial_coords::{Frame, Helioprojective, Observer, SolarCoordinate};
use celestial_core::Angle;
use celestial_time::TT;
use celestial_wcs::{KeywordMap, KeywordProvider, PixelCoord, Wcs};
use rayon::prelude::*;

use crate::core::{DataValue, Dimensions, ImageError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct SolarMap {
    data: Vec<f64>,
    dimensions: Dimensions,
    meta: KeywordMap,
    mask: Option<Vec<bool>>,
    wcs: Wcs,
    date_obs: TT,
    observer: Observer,
}

impl SolarMap {
    pub fn new(data: Vec<f64>, dimensions: Dimensions, mut meta: KeywordMap) -> Result<Self> {
        if data.len() != dimensions.len() {
            return Err(ImageError::ShapeMismatch {
                width: dimensions.width(),
                height: dimensions.height(),
                expected: dimensions.len(),
                actual: data.len(),
            });
        }
        check_axis(&mut meta, "naxis1", dimensions.width())?;
        check_axis(&mut meta, "naxis2", dimensions.height())?;

        let wcs = Wcs::from_header(&meta)?;
        let date_obs: TT = meta
            .get_string("date-obs")
            .or_else(|| meta.get_string("date_obs"))
            .ok_or_else(|| ImageError::MissingMetadata("date-obs".to_string()))?
            .parse()?;
        let observer = observer_from_meta(&meta, date_obs)?;

        Ok(Self {
            data,
            dimensions,
            meta,
            mask: None,
            wcs,
            date_obs,
            observer,
        })
    }

    /// Attaches a mask; `true` marks an invalid cell.
    pub fn with_mask(mut self, mask: Vec<bool>) -> Result<Self> {
        if mask.len() != self.dimensions.len() {
            return Err(ImageError::MaskMismatch {
                expected: self.dimensions.len(),
                actual: mask.len(),
            });
        }
        self.mask = Some(mask);
        Ok(self)
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn mask(&self) -> Option<&[bool]> {
        self.mask.as_deref()
    }

    pub fn meta(&self) -> &KeywordMap {
        &self.meta
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn wcs(&self) -> &Wcs {
        &self.wcs
    }

    /// Per-axis pixel size.
    pub fn scale(&self) -> (Angle, Angle) {
        self.wcs.scale()
    }

    /// Angular radius of the photosphere: `rsun_obs` (arcsec) when present,
    /// otherwise computed from the observer distance.
    pub fn rsun_obs(&self) -> Angle {
        match self.meta.get_float("rsun_obs") {
            Some(arcsec) => Angle::from_arcseconds(arcsec),
            None => self.observer.angular_radius(),
        }
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn date_obs(&self) -> &TT {
        &self.date_obs
    }

    /// The world coordinate at `crval1/2`.
    pub fn reference_coordinate(&self) -> SolarCoordinate {
        let (tx, ty) = self.wcs.crval();
        SolarCoordinate::helioprojective(Helioprojective::new(tx, ty), self.observer)
    }

    /// Data with masked and non-finite cells as [`DataValue::Null`].
    pub fn masked_data(&self) -> Vec<DataValue<f64>> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let masked = self.mask.as_ref().is_some_and(|m| m[i]);
                if masked || !v.is_finite() {
                    DataValue::Null
                } else {
                    DataValue::Value(v)
                }
            })
            .collect()
    }

    pub fn pixel_to_world(&self, pixels: &[PixelCoord]) -> Vec<SolarCoordinate> {
        pixels
            .par_iter()
            .map(|&p| {
                let (tx, ty) = self.wcs.pixel_to_world(p);
                SolarCoordinate::helioprojective(Helioprojective::new(tx, ty), self.observer)
            })
            .collect()
    }

    /// Pixel position of a coordinate as seen by this map's observer, or
    /// `None` when it cannot be expressed in the map frame.
    pub fn world_to_pixel(&self, coordinate: &SolarCoordinate) -> Option<PixelCoord> {
        let seen = coordinate.transform_to(&Frame::Helioprojective {
            observer: self.observer,
        })?;
        let hpc = seen.as_helioprojective()?;
        self.wcs.world_to_pixel(hpc.tx(), hpc.ty())
    }

    /// Zero-pads the image by `pad_x` columns on the left and right and
    /// `pad_y` rows on the top and bottom. The reference pixel moves with the
    /// data and padded mask cells are valid.
    pub fn padded(&self, pad_x: usize, pad_y: usize) -> Result<Self> {
        let dimensions = self.dimensions.padded(pad_x, pad_y);
        let data = pad_buffer(&self.data, self.dimensions, dimensions, pad_x, pad_y, 0.0);
        let mask = self
            .mask
            .as_ref()
            .map(|m| pad_buffer(m, self.dimensions, dimensions, pad_x, pad_y, false));

        let mut meta = self.meta.clone();
        let [crpix1, crpix2] = self.wcs.crpix();
        meta.set_int("naxis1", dimensions.width() as i64)
            .set_int("naxis2", dimensions.height() as i64)
            .set_float("crpix1", crpix1 + pad_x as f64)
            .set_float("crpix2", crpix2 + pad_y as f64);

        let map = Self::new(data, dimensions, meta)?;
        match mask {
            Some(mask) => map.with_mask(mask),
            None => Ok(map),
        }
    }
}

fn check_axis(meta: &mut KeywordMap, key: &str, size: usize) -> Result<()> {
    match meta.get_int(key) {
        Some(n) if n != size as i64 => Err(ImageError::InvalidMetadata(format!(
            "{} = {} but the data has {}",
            key, n, size
        ))),
        Some(_) => Ok(()),
        None => {
            meta.set_int(key, size as i64);
            Ok(())
        }
    }
}

fn observer_from_meta(meta: &KeywordMap, date_obs: TT) -> Result<Observer> {
    let observer = match (
        meta.get_float("hgln_obs"),
        meta.get_float("hglt_obs"),
        meta.get_float("dsun_obs"),
    ) {
        (Some(lon), Some(lat), Some(dsun)) => {
            Observer::from_header_values(lon, lat, dsun, date_obs)?
        }
        _ => Observer::earth(&date_obs)?,
    };
    Ok(observer)
}

fn pad_buffer<T: Copy>(
    src: &[T],
    from: Dimensions,
    to: Dimensions,
    pad_x: usize,
    pad_y: usize,
    fill: T,
) -> Vec<T> {
    let mut out = vec![fill; to.len()];
    for (row, chunk) in src.chunks(from.width().max(1)).enumerate().take(from.height()) {
        let start = to.index(row + pad_y, pad_x);
        out[start..start + chunk.len()].copy_from_slice(chunk);
    }
    out
}
