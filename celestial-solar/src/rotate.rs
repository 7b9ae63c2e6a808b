//! Rotating coordinates with the solar surface.
//!
//! A coordinate observed at `t1` is moved along its latitude by the
//! differential rotation accumulated until the new observer's time `t2`, then
//! re-expressed for the new observer. The rate is always sidereal here: the
//! motion of the Earth is handled by the frame transform, not the model.

use celestial_coords::{Frame, FrameKind, Observer, SolarCoordinate};
use rayon::prelude::*;
use tracing::trace;

use crate::diffrot::{diff_rot, FrameTime, RotationOptions};
use crate::errors::{SolarError, SolarResult};

/// Rotates one coordinate to `new_observer`'s time and viewpoint.
///
/// The output has the frame kind of the input: heliographic at the new time,
/// or helioprojective as seen by `new_observer`. `Ok(None)` means the point
/// has no position on the Sun (it is off the limb).
///
/// ```
/// use celestial_coords::{Helioprojective, Observer, SolarCoordinate};
/// use celestial_solar::{solar_rotate_coordinate, RotationOptions};
/// use celestial_time::TT;
///
/// let t1: TT = "2010-09-10T12:34:56".parse().unwrap();
/// let t2: TT = "2010-09-10T13:34:56".parse().unwrap();
/// let c = SolarCoordinate::helioprojective(
///     Helioprojective::from_arcseconds(-570.0, 120.0),
///     Observer::earth(&t1).unwrap(),
/// );
///
/// let rotated = solar_rotate_coordinate(&c, &Observer::earth(&t2).unwrap(), RotationOptions::default())
///     .unwrap()
///     .unwrap();
/// let (tx, ty) = rotated.as_helioprojective().unwrap().tx_ty_arcsec();
/// assert!((tx + 562.899).abs() < 0.05);
/// assert!((ty - 119.315).abs() < 0.05);
/// ```
pub fn solar_rotate_coordinate(
    coordinate: &SolarCoordinate,
    new_observer: &Observer,
    options: RotationOptions,
) -> SolarResult<Option<SolarCoordinate>> {
    validate_observer(new_observer)?;
    Ok(rotate_checked(coordinate, new_observer, options))
}

/// [`solar_rotate_coordinate`] over many coordinates, in parallel. Output
/// order matches input order.
pub fn solar_rotate_coordinates(
    coordinates: &[SolarCoordinate],
    new_observer: &Observer,
    options: RotationOptions,
) -> SolarResult<Vec<Option<SolarCoordinate>>> {
    validate_observer(new_observer)?;
    Ok(rotate_all(coordinates, new_observer, options))
}

pub(crate) fn rotate_all(
    coordinates: &[SolarCoordinate],
    new_observer: &Observer,
    options: RotationOptions,
) -> Vec<Option<SolarCoordinate>> {
    trace!(points = coordinates.len(), "rotating coordinates");
    coordinates
        .par_iter()
        .map(|c| rotate_checked(c, new_observer, options))
        .collect()
}

pub(crate) fn validate_observer(observer: &Observer) -> SolarResult<()> {
    observer
        .validate()
        .map_err(|e| SolarError::invalid_argument(e.to_string()))
}

/// Rotation for an observer that has already passed validation.
pub(crate) fn rotate_checked(
    coordinate: &SolarCoordinate,
    new_observer: &Observer,
    options: RotationOptions,
) -> Option<SolarCoordinate> {
    let start = *coordinate.obstime();
    let end = *new_observer.obstime();
    let interval = end - start;

    let heliographic = coordinate.transform_to(&Frame::Heliographic { obstime: start })?;
    let position = heliographic.as_heliographic()?;

    let delta = diff_rot(interval, position.latitude(), options.model, FrameTime::Sidereal);
    let rotated = SolarCoordinate::heliographic(position.shifted_longitude(delta), start);

    let at_new_time = rotated.transform_to(&Frame::Heliographic { obstime: end })?;
    match coordinate.kind() {
        FrameKind::Heliographic => Some(at_new_time),
        FrameKind::Helioprojective => at_new_time.transform_to(&Frame::Helioprojective {
            observer: *new_observer,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diffrot::RotationModel;
    use celestial_coords::{Distance, HeliographicStonyhurst, Helioprojective};
    use celestial_core::Angle;
    use celestial_time::{tt_from_calendar, TT};

    fn t1() -> TT {
        tt_from_calendar(2010, 9, 10, 12, 0, 0.0)
    }

    fn earth(t: &TT) -> Observer {
        Observer::earth(t).unwrap()
    }

    #[test]
    fn test_same_time_is_identity() {
        let c = SolarCoordinate::helioprojective(Helioprojective::from_arcseconds(-300.0, 200.0), earth(&t1()));
        let out = solar_rotate_coordinate(&c, &earth(&t1()), RotationOptions::default())
            .unwrap()
            .unwrap();
        let (tx, ty) = out.as_helioprojective().unwrap().tx_ty_arcsec();
        assert!((tx + 300.0).abs() < 1e-6);
        assert!((ty - 200.0).abs() < 1e-6);
    }

    #[test]
    fn test_heliographic_longitude_advances() {
        let t2 = t1().add_days(2.0);
        let p = HeliographicStonyhurst::from_degrees(30.0, 10.0).unwrap();
        let c = SolarCoordinate::heliographic(p, t1());
        let out = solar_rotate_coordinate(&c, &earth(&t2), RotationOptions::default())
            .unwrap()
            .unwrap();
        let q = out.as_heliographic().unwrap();
        assert_eq!(out.obstime(), &t2);
        assert!((q.latitude().degrees() - 30.0).abs() < 1e-8);
        // Sidereal advance minus the Earth's motion along its orbit.
        let advance = q.longitude().degrees() - 10.0;
        assert!(advance > 25.0 && advance < 26.0, "advance = {}", advance);
    }

    #[test]
    fn test_frame_time_override_is_ignored() {
        let t2 = t1().add_days(1.0);
        let c = SolarCoordinate::heliographic(HeliographicStonyhurst::from_degrees(0.0, 0.0).unwrap(), t1());
        let sidereal = solar_rotate_coordinate(&c, &earth(&t2), RotationOptions::default()).unwrap();
        let synodic = solar_rotate_coordinate(
            &c,
            &earth(&t2),
            RotationOptions::default().with_frame_time(FrameTime::Synodic),
        )
        .unwrap();
        assert_eq!(sidereal, synodic);
    }

    #[test]
    fn test_model_changes_result() {
        let t2 = t1().add_days(3.0);
        let c = SolarCoordinate::heliographic(HeliographicStonyhurst::from_degrees(60.0, 0.0).unwrap(), t1());
        let howard = solar_rotate_coordinate(&c, &earth(&t2), RotationOptions::default())
            .unwrap()
            .unwrap();
        let allen = solar_rotate_coordinate(
            &c,
            &earth(&t2),
            RotationOptions::default().with_model(RotationModel::Allen),
        )
        .unwrap()
        .unwrap();
        let a = howard.as_heliographic().unwrap().longitude();
        let b = allen.as_heliographic().unwrap().longitude();
        assert!((a - b).degrees().abs() > 0.1);
    }

    #[test]
    fn test_off_disk_is_none() {
        let c = SolarCoordinate::helioprojective(Helioprojective::from_arcseconds(1500.0, 0.0), earth(&t1()));
        let out = solar_rotate_coordinate(&c, &earth(&t1().add_days(1.0)), RotationOptions::default()).unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn test_invalid_observer_rejected() {
        let inside = Observer::new(
            HeliographicStonyhurst::with_radius(
                Angle::ZERO,
                Angle::ZERO,
                Distance::from_solar_radii(0.5).unwrap(),
            )
            .unwrap(),
            t1(),
        );
        let c = SolarCoordinate::heliographic(HeliographicStonyhurst::from_degrees(0.0, 0.0).unwrap(), t1());
        let err = solar_rotate_coordinate(&c, &inside, RotationOptions::default()).unwrap_err();
        assert!(matches!(err, SolarError::InvalidArgument { .. }));
        assert!(solar_rotate_coordinates(&[c], &inside, RotationOptions::default()).is_err());
    }

    #[test]
    fn test_array_matches_scalar() {
        let obs = earth(&t1());
        let t2 = earth(&t1().add_days(0.5));
        let coords: Vec<SolarCoordinate> = [(-800.0, 100.0), (0.0, 0.0), (2000.0, 0.0), (450.0, -620.0)]
            .iter()
            .map(|&(x, y)| SolarCoordinate::helioprojective(Helioprojective::from_arcseconds(x, y), obs))
            .collect();
        let many = solar_rotate_coordinates(&coords, &t2, RotationOptions::default()).unwrap();
        assert_eq!(many.len(), coords.len());
        assert!(many[2].is_none());
        for (c, m) in coords.iter().zip(&many) {
            let one = solar_rotate_coordinate(c, &t2, RotationOptions::default()).unwrap();
            assert_eq!(&one, m);
        }
    }
}
