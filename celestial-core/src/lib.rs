//! Low-level building blocks for solar coordinate calculations.
//!
//! `celestial-core` holds the typed quantities and small linear-algebra pieces the
//! rest of the workspace is built on. Nothing here knows about the Sun or images;
//! it is plain math with units attached.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`] type, normalization, validation |
//! | [`quantity`] | [`Duration`] and [`AngularRate`], unit-checked time and rate values |
//! | [`matrix`] | [`Vector3`] and [`RotationMatrix3`] |
//! | [`constants`] | Unit conversions and astronomical constants |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//!
//! # Re-exports
//!
//! ```
//! use celestial_core::{Angle, AngularRate, Duration, RotationMatrix3, Vector3};
//! use celestial_core::{AstroError, AstroResult, MathErrorKind};
//! ```
//!
//! # Units
//!
//! Every quantity stores one canonical unit internally (radians, seconds,
//! radians per second) and converts only at constructors and accessors. Mixing
//! an angular rate with a duration yields an [`Angle`]:
//!
//! ```
//! use celestial_core::{AngularRate, Duration};
//!
//! let rate = AngularRate::from_degrees_per_day(14.0);
//! let delta = rate * Duration::from_days(2.0);
//! assert!((delta.degrees() - 28.0).abs() < 1e-12);
//! ```

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;
pub mod quantity;

pub use angle::Angle;
pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use matrix::{RotationMatrix3, Vector3};
pub use quantity::{AngularRate, Duration};
