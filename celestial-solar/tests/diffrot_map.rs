use celestial_coords::{Frame, HeliographicStonyhurst, Observer};
use celestial_core::Angle;
use celestial_images::{Dimensions, SolarMap};
use celestial_solar::{
    diffrot_map, solar_rotate_coordinates, world_coordinates, RotationOptions, SolarError,
};
use celestial_time::TT;
use celestial_wcs::{KeywordMap, KeywordProvider};

const DATE: &str = "2010-09-10T12:00:00";

fn meta(n: usize, scale: f64, centre: (f64, f64)) -> KeywordMap {
    let mut meta = KeywordMap::new();
    let crpix = (n as f64 + 1.0) / 2.0;
    meta.set_float("crpix1", crpix)
        .set_float("crpix2", crpix)
        .set_float("crval1", centre.0)
        .set_float("crval2", centre.1)
        .set_float("cdelt1", scale)
        .set_float("cdelt2", scale)
        .set_string("cunit1", "arcsec")
        .set_string("cunit2", "arcsec")
        .set_string("ctype1", "HPLN-TAN")
        .set_string("ctype2", "HPLT-TAN")
        .set_string("date_obs", DATE)
        .set_string("date-obs", DATE);
    meta
}

fn ramp_map(n: usize, scale: f64, centre: (f64, f64)) -> SolarMap {
    let data = (0..n * n).map(|i| (i % n) as f64 + 2.0 * (i / n) as f64).collect();
    SolarMap::new(data, Dimensions::new(n, n), meta(n, scale, centre)).unwrap()
}

fn later(days: f64) -> Observer {
    let t: TT = DATE.parse().unwrap();
    Observer::earth(&t.add_days(days)).unwrap()
}

fn assert_nan_iff_masked(map: &SolarMap) {
    let mask = map.mask().expect("warped maps carry a mask");
    for (v, m) in map.data().iter().zip(mask) {
        assert_eq!(v.is_nan(), *m);
    }
}

#[test]
fn all_off_disk_map_is_returned_unchanged() {
    let map = ramp_map(10, 10.0, (1500.0, 0.0));
    let out = diffrot_map(&map, &later(1.0), RotationOptions::default()).unwrap();
    assert_eq!(out, map);
}

#[test]
fn invalid_observer_is_rejected_before_work() {
    let map = ramp_map(10, 10.0, (0.0, 0.0));
    let t: TT = DATE.parse().unwrap();
    let inside = Observer::new(
        HeliographicStonyhurst::from_degrees(0.0, 0.0).unwrap(),
        t,
    );
    let err = diffrot_map(&map, &inside, RotationOptions::default()).unwrap_err();
    assert!(matches!(err, SolarError::InvalidArgument { .. }));
}

#[test]
fn full_disk_map_keeps_its_size_and_reference() {
    let map = ramp_map(64, 40.0, (0.0, 0.0));
    let out = diffrot_map(&map, &later(1.0), RotationOptions::default()).unwrap();

    assert_eq!(out.dimensions(), map.dimensions());
    assert_eq!(out.wcs().crpix(), map.wcs().crpix());
    assert_eq!(out.wcs().crval(), map.wcs().crval());
    assert_nan_iff_masked(&out);

    let mask = out.mask().unwrap();
    // Corners are off the disk and have no source.
    assert!(mask[0] && mask[63] && mask[64 * 63]);
    assert!(mask.iter().any(|m| !m));
}

#[test]
fn metadata_is_repaired_on_a_copy() {
    let mut m = meta(64, 40.0, (0.0, 0.0));
    m.set_float("rsun_obs", 950.0);
    let map = SolarMap::new(vec![1.0; 64 * 64], Dimensions::new(64, 64), m).unwrap();
    let before = map.clone();

    let observer = later(2.0);
    let out = diffrot_map(&map, &observer, RotationOptions::default()).unwrap();

    assert_eq!(map, before);
    assert_eq!(out.meta().get_string("date_obs"), None);
    let written: TT = out.meta().get_string("date-obs").unwrap().parse().unwrap();
    assert!((written - *observer.obstime()).seconds().abs() < 1e-3);
    assert!((*out.date_obs() - *observer.obstime()).seconds().abs() < 1e-3);

    assert!(out.meta().get_float("hgln_obs").unwrap().abs() < 1e-9);
    let hglt = out.meta().get_float("hglt_obs").unwrap();
    assert!((hglt - observer.latitude().degrees()).abs() < 1e-12);
    let dsun = out.meta().get_float("dsun_obs").unwrap();
    assert!((dsun - observer.distance().meters()).abs() < 1.0);
    let rsun = out.meta().get_float("rsun_obs").unwrap();
    assert!((rsun - observer.angular_radius().arcseconds()).abs() < 1e-9);
    assert!((out.observer().latitude() - observer.latitude()).degrees().abs() < 1e-9);
}

#[test]
fn zero_interval_reproduces_disk_pixels() {
    let map = ramp_map(64, 40.0, (0.0, 0.0));
    let t: TT = DATE.parse().unwrap();
    let out = diffrot_map(&map, &Observer::earth(&t).unwrap(), RotationOptions::default()).unwrap();

    let radii = celestial_solar::pixel_radii(&map, None);
    let mask = out.mask().unwrap();
    for (i, r) in radii.iter().enumerate() {
        if *r < 0.95 {
            assert!(!mask[i], "pixel {} masked", i);
            assert!((out.data()[i] - map.data()[i]).abs() < 1e-5, "pixel {}", i);
        } else if *r > 1.05 {
            assert!(mask[i], "pixel {} unmasked", i);
        }
    }
}

#[test]
fn submap_grows_symmetrically_and_moves_reference() {
    let map = ramp_map(20, 10.0, (0.0, 0.0));
    let out = diffrot_map(&map, &later(1.0), RotationOptions::default()).unwrap();

    let (w, h) = (out.dimensions().width(), out.dimensions().height());
    assert!(w >= 20 && h >= 20);
    assert_eq!((w - 20) % 2, 0);
    assert_eq!((h - 20) % 2, 0);

    let [cx, cy] = out.wcs().crpix();
    assert_eq!(cx - 10.5, ((w - 20) / 2) as f64);
    assert_eq!(cy - 10.5, ((h - 20) / 2) as f64);

    // Disk centre rotates roughly 13° west in a day.
    let (tx, ty) = out.wcs().crval();
    assert!(tx.arcseconds() > 150.0 && tx.arcseconds() < 300.0, "crval1 = {}", tx);
    assert!(ty.arcseconds().abs() < 20.0, "crval2 = {}", ty);
    assert_nan_iff_masked(&out);
}

#[test]
fn points_rotated_past_the_limb_are_masked() {
    let map = ramp_map(64, 40.0, (0.0, 0.0));
    let observer = later(3.0);
    let out = diffrot_map(&map, &observer, RotationOptions::default()).unwrap();
    assert_eq!(out.dimensions(), map.dimensions());
    assert_nan_iff_masked(&out);

    // Cells whose surface point has rotated onto the far side by the new time.
    let frame = Frame::Heliographic {
        obstime: *observer.obstime(),
    };
    let rotated = solar_rotate_coordinates(&world_coordinates(&map), &observer, RotationOptions::default())
        .unwrap();
    let behind: Vec<usize> = rotated
        .iter()
        .enumerate()
        .filter_map(|(i, r)| {
            let hgs = r.as_ref()?.transform_to(&frame)?;
            let lon = hgs.as_heliographic()?.longitude() - observer.longitude();
            (lon.wrapped_signed().degrees().abs() > 90.0).then_some(i)
        })
        .collect();
    assert!(behind.len() >= 10, "only {} cells cross the limb", behind.len());

    let mask = out.mask().unwrap();
    for &i in &behind {
        assert!(mask[i], "cell {} rotated behind the limb but is unmasked", i);
    }

    // A cell near disk centre samples a point that was on the visible disk.
    let centre = 32 * 64 + 32;
    assert!(!behind.contains(&centre));
    assert!(!mask[centre]);
    assert!(out.data()[centre].is_finite());
}

#[test]
fn masked_input_cells_stay_unsampled() {
    let map = ramp_map(64, 40.0, (0.0, 0.0))
        .with_mask(vec![true; 64 * 64])
        .unwrap();
    let out = diffrot_map(&map, &later(1.0), RotationOptions::default()).unwrap();
    assert!(out.mask().unwrap().iter().all(|&m| m));
    assert!(out.data().iter().all(|v| v.is_nan()));
}

#[test]
fn synodic_options_do_not_change_the_warp() {
    let map = ramp_map(20, 10.0, (-300.0, 200.0));
    let a = diffrot_map(&map, &later(0.5), RotationOptions::default()).unwrap();
    let b = diffrot_map(
        &map,
        &later(0.5),
        RotationOptions::default().with_frame_time(celestial_solar::FrameTime::Synodic),
    )
    .unwrap();
    assert_eq!(a.dimensions(), b.dimensions());
    assert_eq!(a.mask(), b.mask());
    let (ta, _) = a.wcs().crval();
    let (tb, _) = b.wcs().crval();
    assert!((ta - tb).radians().abs() < Angle::from_arcseconds(1e-9).radians());
}
