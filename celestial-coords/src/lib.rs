//! Solar coordinate frames.
//!
//! Two frames cover everything the rotation code needs:
//!
//! | Frame | Type | Defined by |
//! |-------|------|------------|
//! | Heliographic Stonyhurst | [`HeliographicStonyhurst`] | observation time |
//! | Helioprojective | [`Helioprojective`] | an [`Observer`] (position + time) |
//!
//! [`SolarCoordinate`] pairs a position with its frame and converts between
//! frames with [`SolarCoordinate::transform_to`]. Conversions that have no
//! answer, such as a line of sight that misses the Sun, return `None` rather
//! than NaN-filled values.
//!
//! The [`solar`] module holds the low-precision solar ephemeris that fixes
//! the heliographic axes and the Earth observer.

pub mod constants;
pub mod coordinate;
pub mod distance;
pub mod errors;
pub mod frames;
pub mod observer;
pub mod solar;

pub use celestial_core::Angle;
pub use coordinate::{Frame, FrameKind, SolarCoordinate};
pub use distance::Distance;
pub use errors::{CoordError, CoordResult};
pub use frames::{HeliographicStonyhurst, Helioprojective};
pub use observer::Observer;

pub use celestial_time::{TimeError, TimeResult, TT};
