//! Differential rotation of whole image maps.
//!
//! [`diffrot_map`] resamples a map so that it shows the Sun as the new
//! observer would see it after the surface has rotated. Sub-maps (fields of
//! view that do not contain the whole disk) are first padded so rotated
//! content is not clipped; pixels that rotate onto the far side are masked.

use celestial_coords::{CoordError, Frame, Observer, SolarCoordinate};
use celestial_core::Angle;
use celestial_images::{to_norm, un_norm, warp, DataValue, IntensityRange, SolarMap};
use celestial_wcs::{KeywordMap, KeywordProvider, PixelCoord};
use rayon::prelude::*;
use tracing::debug;

use crate::diffrot::RotationOptions;
use crate::disk::{contains_full_disk, is_all_off_disk, map_edges};
use crate::errors::SolarResult;
use crate::rotate::{rotate_all, rotate_checked, validate_observer};

/// Half-width of the visible hemisphere around the observer's longitude.
const VISIBLE_HALF_WIDTH_DEG: f64 = 90.0;

/// Rotates `map` to the time and viewpoint of `new_observer`.
///
/// The input is never modified. A map entirely off the disk is returned
/// unchanged. In the output, cells with no source (rotated behind the limb,
/// off the disk, or outside the input) are NaN with the mask set.
pub fn diffrot_map(
    map: &SolarMap,
    new_observer: &Observer,
    options: RotationOptions,
) -> SolarResult<SolarMap> {
    validate_observer(new_observer)?;

    if is_all_off_disk(map) {
        debug!("map is entirely off disk, returning it unchanged");
        return Ok(map.clone());
    }

    let submap = !contains_full_disk(map);
    debug!(submap, dimensions = %map.dimensions(), "rotating map");

    let padded;
    let working = if submap {
        let (pad_x, pad_y) = rotation_padding(map, new_observer, options);
        debug!(pad_x, pad_y, "padding sub-map");
        padded = map.padded(pad_x, pad_y)?;
        &padded
    } else {
        map
    };

    let source = working.masked_data();
    let dimensions = working.dimensions();
    let resampled = match IntensityRange::of(&source) {
        Some(range) => {
            let normalized = to_norm(&source, &range);
            let out = warp(&normalized, dimensions, |pixels| {
                inverse_map(working, pixels, new_observer, options)
            });
            un_norm(&out, &range)
        }
        None => vec![DataValue::Null; dimensions.len()],
    };

    let meta = repaired_meta(map, working, new_observer, options, submap)?;

    let (data, mask): (Vec<f64>, Vec<bool>) = resampled
        .into_iter()
        .map(|v| match v {
            DataValue::Value(x) => (x, false),
            DataValue::Null => (f64::NAN, true),
        })
        .unzip();

    Ok(SolarMap::new(data, dimensions, meta)?.with_mask(mask)?)
}

/// Source pixel in `map` for each output pixel, `None` where the rotated
/// point is hidden from `new_observer` or has no position on the map.
fn inverse_map(
    map: &SolarMap,
    pixels: &[PixelCoord],
    new_observer: &Observer,
    options: RotationOptions,
) -> Vec<Option<PixelCoord>> {
    let world = map.pixel_to_world(pixels);
    let rotated = rotate_all(&world, new_observer, options);
    let frame = Frame::Heliographic {
        obstime: *new_observer.obstime(),
    };

    rotated
        .par_iter()
        .map(|r| {
            let r = r.as_ref()?;
            let heliographic = r.transform_to(&frame)?;
            let lon = heliographic.as_heliographic()?.longitude() - new_observer.longitude();
            if lon.wrapped_signed().degrees().abs() > VISIBLE_HALF_WIDTH_DEG {
                return None;
            }
            // Tx/Ty as seen by the new observer index the input grid directly.
            let hpc = r.as_helioprojective()?;
            map.wcs().world_to_pixel(hpc.tx(), hpc.ty())
        })
        .collect()
}

/// Symmetric padding per axis so the rotated field of view fits.
fn rotation_padding(map: &SolarMap, new_observer: &Observer, options: RotationOptions) -> (usize, usize) {
    let edges = map_edges(map);
    let rotated = |pixels: &[PixelCoord]| -> Vec<Option<(Angle, Angle)>> {
        rotate_all(&map.pixel_to_world(pixels), new_observer, options)
            .iter()
            .map(|c| {
                c.as_ref()
                    .and_then(SolarCoordinate::as_helioprojective)
                    .map(|h| (h.tx(), h.ty()))
            })
            .collect()
    };

    let top = rotated(&edges.top);
    let bottom = rotated(&edges.bottom);
    let left = rotated(&edges.left);
    let right = rotated(&edges.right);

    let (dx_tb, dy_tb) = max_separation(&top, &bottom);
    let (dx_lr, dy_lr) = max_separation(&left, &right);

    let (scale_x, scale_y) = map.scale();
    let dims = map.dimensions();
    let nx = required_size(max_of(dx_tb, dx_lr), scale_x, dims.width());
    let ny = required_size(max_of(dy_tb, dy_lr), scale_y, dims.height());

    (nx.abs_diff(dims.width()), ny.abs_diff(dims.height()))
}

/// Largest |ΔTx| and |ΔTy| over index-matched pairs where both are defined.
fn max_separation(
    a: &[Option<(Angle, Angle)>],
    b: &[Option<(Angle, Angle)>],
) -> (Option<Angle>, Option<Angle>) {
    a.iter()
        .zip(b)
        .filter_map(|(p, q)| Some(((*p)?, (*q)?)))
        .fold((None, None), |(dx, dy), ((tx1, ty1), (tx2, ty2))| {
            (
                max_of(dx, Some((tx1 - tx2).abs())),
                max_of(dy, Some((ty1 - ty2).abs())),
            )
        })
}

fn max_of(a: Option<Angle>, b: Option<Angle>) -> Option<Angle> {
    match (a, b) {
        (Some(x), Some(y)) => Some(if y.radians() > x.radians() { y } else { x }),
        (x, None) => x,
        (None, y) => y,
    }
}

fn required_size(extent: Option<Angle>, scale: Angle, current: usize) -> usize {
    match extent {
        Some(e) if scale.radians() > 0.0 => (e.radians() / scale.radians()).ceil() as usize,
        _ => current,
    }
}

fn repaired_meta(
    original: &SolarMap,
    working: &SolarMap,
    new_observer: &Observer,
    options: RotationOptions,
    submap: bool,
) -> SolarResult<KeywordMap> {
    let mut meta = working.meta().clone();

    let date = new_observer
        .obstime()
        .try_to_iso8601()
        .map_err(CoordError::from)?;
    meta.remove("date_obs");
    meta.set_string("date-obs", date);

    meta.set_float("hgln_obs", new_observer.position().signed_longitude().degrees())
        .set_float("hglt_obs", new_observer.latitude().degrees())
        .set_float("dsun_obs", new_observer.distance().meters());
    if meta.contains_key("rsun_obs") {
        meta.set_float("rsun_obs", new_observer.angular_radius().arcseconds());
    }

    if submap {
        match rotate_checked(&original.reference_coordinate(), new_observer, options)
            .as_ref()
            .and_then(SolarCoordinate::as_helioprojective)
        {
            Some(hpc) => {
                let [unit1, unit2] = working.wcs().units();
                meta.set_float("crval1", unit1.value_of(hpc.tx()))
                    .set_float("crval2", unit2.value_of(hpc.ty()));
            }
            None => debug!("reference coordinate is off disk, keeping crval"),
        }
    }

    debug!(date_obs = ?meta.get_string("date-obs"), "repaired map metadata");
    Ok(meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_coords::HeliographicStonyhurst;
    use celestial_images::Dimensions;

    fn limb_map() -> SolarMap {
        let mut meta = KeywordMap::new();
        meta.set_float("crpix1", 10.5)
            .set_float("crpix2", 10.5)
            .set_float("crval1", 900.0)
            .set_float("crval2", 0.0)
            .set_float("cdelt1", 10.0)
            .set_float("cdelt2", 10.0)
            .set_string("date-obs", "2010-09-10T12:00:00");
        SolarMap::new(vec![1.0; 400], Dimensions::new(20, 20), meta).unwrap()
    }

    fn deg(d: f64) -> Option<Angle> {
        Some(Angle::from_degrees(d))
    }

    #[test]
    fn test_max_separation_skips_undefined_pairs() {
        let a = [
            Some((Angle::from_arcseconds(10.0), Angle::from_arcseconds(0.0))),
            None,
            Some((Angle::from_arcseconds(-5.0), Angle::from_arcseconds(40.0))),
        ];
        let b = [
            Some((Angle::from_arcseconds(0.0), Angle::from_arcseconds(100.0))),
            Some((Angle::from_arcseconds(900.0), Angle::from_arcseconds(900.0))),
            Some((Angle::from_arcseconds(25.0), Angle::from_arcseconds(50.0))),
        ];
        let (dx, dy) = max_separation(&a, &b);
        assert!((dx.unwrap().arcseconds() - 30.0).abs() < 1e-9);
        assert!((dy.unwrap().arcseconds() - 100.0).abs() < 1e-9);

        assert_eq!(max_separation(&[None], &[None]), (None, None));
    }

    #[test]
    fn test_max_of() {
        assert_eq!(max_of(deg(1.0), deg(2.0)), deg(2.0));
        assert_eq!(max_of(None, deg(2.0)), deg(2.0));
        assert_eq!(max_of(deg(3.0), None), deg(3.0));
        assert_eq!(max_of(None, None), None);
    }

    #[test]
    fn test_required_size() {
        let scale = Angle::from_arcseconds(10.0);
        assert_eq!(required_size(Some(Angle::from_arcseconds(191.0)), scale, 20), 20);
        assert_eq!(required_size(Some(Angle::from_arcseconds(201.0)), scale, 20), 21);
        assert_eq!(required_size(None, scale, 20), 20);
    }

    #[test]
    fn test_inverse_map_masks_points_rotated_behind_limb() {
        let map = limb_map();
        let t2 = map.date_obs().add_days(2.0);
        let later = Observer::earth(&t2).unwrap();

        let near_limb = SolarCoordinate::heliographic(
            HeliographicStonyhurst::from_degrees(0.0, 85.0).unwrap(),
            *map.date_obs(),
        );
        let pixel = map.world_to_pixel(&near_limb).unwrap();
        let out = inverse_map(&map, &[pixel], &later, RotationOptions::default());
        assert_eq!(out, vec![None]);
    }

    #[test]
    fn test_inverse_map_same_time_is_identity_on_disk() {
        let map = limb_map();
        let pixels = [PixelCoord::new(0.0, 0.0), PixelCoord::new(3.0, 17.0)];
        let out = inverse_map(&map, &pixels, map.observer(), RotationOptions::default());
        for (p, q) in pixels.iter().zip(&out) {
            let q = q.unwrap();
            assert!((q.x() - p.x()).abs() < 1e-6);
            assert!((q.y() - p.y()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_inverse_map_follows_apparent_rotation() {
        let mut meta = KeywordMap::new();
        meta.set_float("crpix1", 32.5)
            .set_float("crpix2", 32.5)
            .set_float("crval1", 0.0)
            .set_float("crval2", 0.0)
            .set_float("cdelt1", 40.0)
            .set_float("cdelt2", 40.0)
            .set_string("date-obs", "2010-09-10T12:00:00");
        let map = SolarMap::new(vec![1.0; 64 * 64], Dimensions::new(64, 64), meta).unwrap();
        let later = Observer::earth(&map.date_obs().add_days(1.0)).unwrap();

        let centre = PixelCoord::new(31.5, 31.5);
        let rotated = crate::solar_rotate_coordinate(
            &map.pixel_to_world(&[centre])[0],
            &later,
            RotationOptions::default(),
        )
        .unwrap()
        .unwrap();
        let (tx, ty) = rotated.as_helioprojective().unwrap().tx_ty_arcsec();

        let source = inverse_map(&map, &[centre], &later, RotationOptions::default())[0].unwrap();
        assert!((source.x() - (31.5 + tx / 40.0)).abs() < 0.01, "x = {}, tx = {}", source.x(), tx);
        assert!((source.y() - (31.5 + ty / 40.0)).abs() < 0.01, "y = {}, ty = {}", source.y(), ty);
        // About 13.2° a day at the equator less the Earth's orbital motion.
        assert!(tx > 200.0 && tx < 230.0, "tx = {}", tx);
    }

    #[test]
    fn test_inverse_map_off_disk_is_none() {
        let map = limb_map();
        // Column 19 sits at Tx = 995", past the limb.
        let out = inverse_map(&map, &[PixelCoord::new(19.0, 10.0)], map.observer(), RotationOptions::default());
        assert_eq!(out, vec![None]);
    }
}
