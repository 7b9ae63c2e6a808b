//! Coordinates tagged with their frame, and the closed set of transforms
//! between frames.
//!
//! | From \ To | `Heliographic { obstime }` | `Helioprojective { observer }` |
//! |-----------|----------------------------|--------------------------------|
//! | Heliographic | rotate about the solar pole between frame times | reframe to observer time, project |
//! | Helioprojective | deproject (may miss the Sun), reframe | deproject, reframe, project |
//!
//! A transform that has no answer (a line of sight that misses the Sun)
//! returns `None`.
//!
//! ```
//! use celestial_coords::{Frame, HeliographicStonyhurst, Observer, SolarCoordinate};
//! use celestial_time::TT;
//!
//! let t: TT = "2010-09-10T12:00:00".parse().unwrap();
//! let earth = Observer::earth(&t).unwrap();
//! let point = SolarCoordinate::heliographic(
//!     HeliographicStonyhurst::from_degrees(0.0, 30.0).unwrap(),
//!     t,
//! );
//!
//! let seen = point.transform_to(&Frame::Helioprojective { observer: earth }).unwrap();
//! let (tx, _) = seen.as_helioprojective().unwrap().tx_ty_arcsec();
//! assert!(tx > 400.0 && tx < 500.0);
//! ```

use crate::{Helioprojective, HeliographicStonyhurst, Observer};
use celestial_time::TT;

/// The frames a [`SolarCoordinate`] can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frame {
    Heliographic { obstime: TT },
    Helioprojective { observer: Observer },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameKind {
    Heliographic,
    Helioprojective,
}

impl Frame {
    pub fn kind(&self) -> FrameKind {
        match self {
            Frame::Heliographic { .. } => FrameKind::Heliographic,
            Frame::Helioprojective { .. } => FrameKind::Helioprojective,
        }
    }

    pub fn obstime(&self) -> &TT {
        match self {
            Frame::Heliographic { obstime } => obstime,
            Frame::Helioprojective { observer } => observer.obstime(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolarCoordinate {
    Heliographic {
        position: HeliographicStonyhurst,
        obstime: TT,
    },
    Helioprojective {
        position: Helioprojective,
        observer: Observer,
    },
}

impl SolarCoordinate {
    pub fn heliographic(position: HeliographicStonyhurst, obstime: TT) -> Self {
        Self::Heliographic { position, obstime }
    }

    pub fn helioprojective(position: Helioprojective, observer: Observer) -> Self {
        Self::Helioprojective { position, observer }
    }

    pub fn obstime(&self) -> &TT {
        match self {
            Self::Heliographic { obstime, .. } => obstime,
            Self::Helioprojective { observer, .. } => observer.obstime(),
        }
    }

    pub fn kind(&self) -> FrameKind {
        match self {
            Self::Heliographic { .. } => FrameKind::Heliographic,
            Self::Helioprojective { .. } => FrameKind::Helioprojective,
        }
    }

    /// The frame this coordinate is currently expressed in.
    pub fn frame(&self) -> Frame {
        match self {
            Self::Heliographic { obstime, .. } => Frame::Heliographic { obstime: *obstime },
            Self::Helioprojective { observer, .. } => Frame::Helioprojective {
                observer: *observer,
            },
        }
    }

    pub fn as_heliographic(&self) -> Option<&HeliographicStonyhurst> {
        match self {
            Self::Heliographic { position, .. } => Some(position),
            Self::Helioprojective { .. } => None,
        }
    }

    pub fn as_helioprojective(&self) -> Option<&Helioprojective> {
        match self {
            Self::Heliographic { .. } => None,
            Self::Helioprojective { position, .. } => Some(position),
        }
    }

    pub fn transform_to(&self, frame: &Frame) -> Option<SolarCoordinate> {
        match frame {
            Frame::Heliographic { obstime } => {
                let position = self.heliographic_at(obstime)?;
                Some(Self::heliographic(position, *obstime))
            }
            Frame::Helioprojective { observer } => {
                if let Self::Helioprojective {
                    observer: current, ..
                } = self
                {
                    if current == observer {
                        return Some(*self);
                    }
                }
                let position = self.heliographic_at(observer.obstime())?;
                let projected = Helioprojective::from_heliographic(&position, observer).ok()?;
                Some(Self::helioprojective(projected, *observer))
            }
        }
    }

    fn heliographic_at(&self, obstime: &TT) -> Option<HeliographicStonyhurst> {
        let (position, frame_time) = match self {
            Self::Heliographic {
                position,
                obstime: frame_time,
            } => (*position, frame_time),
            Self::Helioprojective { position, observer } => {
                (position.to_heliographic(observer)?, observer.obstime())
            }
        };
        position.reframe(frame_time, obstime).ok()
    }
}

impl std::fmt::Display for SolarCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heliographic { position, obstime } => write!(f, "{} at {}", position, obstime),
            Self::Helioprojective { position, observer } => {
                write!(f, "{} seen by {}", position, observer)
            }
        }
    }
}
