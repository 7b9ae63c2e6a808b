//! World coordinate systems for helioprojective solar images.
//!
//! A [`Wcs`] is read from FITS-style keywords through [`KeywordProvider`] and
//! maps 0-based [`PixelCoord`]s to helioprojective (Tx, Ty) angles and back.

pub mod coordinate;
pub mod error;
pub mod header;
pub mod linear;
pub mod projection;
pub mod wcs;

pub use coordinate::{IntermediateCoord, PixelCoord};
pub use error::{WcsError, WcsResult};
pub use header::{KeywordMap, KeywordProvider};
pub use linear::LinearTransform;
pub use projection::Projection;
pub use wcs::{AngleUnit, Wcs};
