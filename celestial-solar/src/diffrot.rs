//! Empirical differential rotation profiles.
//!
//! Every model gives the sidereal angular velocity of the surface as
//!
//! ```text
//! ω(φ) = A + B sin²φ + C sin⁴φ
//! ```
//!
//! | Model | A | B | C | Unit |
//! |-------|---|---|---|------|
//! | Howard (small magnetic features) | 2.894 | −0.428 | −0.370 | µrad/s |
//! | Snodgrass | 2.851 | −0.343 | −0.474 | µrad/s |
//! | Allen | 14.44 | −3.0 | 0 | °/day |
//!
//! ```
//! use celestial_core::{Angle, Duration};
//! use celestial_solar::diffrot::{diff_rot, FrameTime, RotationModel};
//!
//! let delta = diff_rot(
//!     Duration::from_days(2.0),
//!     Angle::from_degrees(30.0),
//!     RotationModel::Howard,
//!     FrameTime::Sidereal,
//! );
//! assert!((delta.degrees() - 27.3643).abs() < 1e-4);
//! ```

use std::fmt;
use std::str::FromStr;

use celestial_core::{Angle, AngularRate, Duration};

use crate::errors::SolarError;

/// Mean motion of the Earth, removed from sidereal rates for synodic ones.
pub const SYNODIC_CORRECTION_DEG_PER_DAY: f64 = 0.9856;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RotationModel {
    #[default]
    Howard,
    Snodgrass,
    Allen,
}

impl RotationModel {
    pub const ALL: [RotationModel; 3] = [Self::Howard, Self::Snodgrass, Self::Allen];

    /// `(A, B, C)` of the rate polynomial.
    pub fn coefficients(self) -> [AngularRate; 3] {
        match self {
            Self::Howard => [
                AngularRate::from_microradians_per_second(2.894),
                AngularRate::from_microradians_per_second(-0.428),
                AngularRate::from_microradians_per_second(-0.370),
            ],
            Self::Snodgrass => [
                AngularRate::from_microradians_per_second(2.851),
                AngularRate::from_microradians_per_second(-0.343),
                AngularRate::from_microradians_per_second(-0.474),
            ],
            Self::Allen => [
                AngularRate::from_degrees_per_day(14.44),
                AngularRate::from_degrees_per_day(-3.0),
                AngularRate::ZERO,
            ],
        }
    }

    /// Sidereal rotation rate at `latitude`.
    pub fn rate(self, latitude: Angle) -> AngularRate {
        let [a, b, c] = self.coefficients();
        let sin2 = latitude.sin() * latitude.sin();
        let sin4 = sin2 * sin2;
        a + b * sin2 + c * sin4
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Howard => "howard",
            Self::Snodgrass => "snodgrass",
            Self::Allen => "allen",
        }
    }
}

impl FromStr for RotationModel {
    type Err = SolarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| {
                SolarError::invalid_argument(format!(
                    "rotation model must be one of {{ howard | snodgrass | allen }}, got '{}'",
                    s
                ))
            })
    }
}

impl fmt::Display for RotationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which day the rotation is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FrameTime {
    /// Relative to the fixed stars.
    #[default]
    Sidereal,
    /// Relative to the orbiting Earth.
    Synodic,
}

impl FrameTime {
    pub fn name(self) -> &'static str {
        match self {
            Self::Sidereal => "sidereal",
            Self::Synodic => "synodic",
        }
    }
}

impl FromStr for FrameTime {
    type Err = SolarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sidereal" => Ok(Self::Sidereal),
            "synodic" => Ok(Self::Synodic),
            other => Err(SolarError::invalid_argument(format!(
                "frame time must be 'sidereal' or 'synodic', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for FrameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rotation overrides passed through the rotator and map warp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationOptions {
    pub model: RotationModel,
    pub frame_time: FrameTime,
}

impl RotationOptions {
    pub fn new(model: RotationModel, frame_time: FrameTime) -> Self {
        Self { model, frame_time }
    }

    pub fn with_model(self, model: RotationModel) -> Self {
        Self { model, ..self }
    }

    pub fn with_frame_time(self, frame_time: FrameTime) -> Self {
        Self { frame_time, ..self }
    }
}

/// Longitude advance over `duration` at `latitude`, wrapped to [0°, 360°).
pub fn diff_rot(
    duration: Duration,
    latitude: Angle,
    model: RotationModel,
    frame_time: FrameTime,
) -> Angle {
    let mut rotation = model.rate(latitude) * duration;
    if frame_time == FrameTime::Synodic {
        rotation -= AngularRate::from_degrees_per_day(SYNODIC_CORRECTION_DEG_PER_DAY) * duration;
    }
    rotation.wrapped()
}

/// [`diff_rot`] over many latitudes; output order matches input order.
pub fn diff_rot_many(
    duration: Duration,
    latitudes: &[Angle],
    model: RotationModel,
    frame_time: FrameTime,
) -> Vec<Angle> {
    latitudes
        .iter()
        .map(|&lat| diff_rot(duration, lat, model, frame_time))
        .collect()
}
