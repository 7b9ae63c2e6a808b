//! Solar image maps and resampling.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`map`] | [`SolarMap`]: data, mask, keyword metadata, WCS and observer |
//! | [`warp`] | bilinear resampling through an inverse pixel map |
//! | [`normalize`] | intensity rescaling around resampling |
//! | [`core`] | [`DataValue`], [`Dimensions`], [`ImageError`] |

pub mod core;
pub mod map;
pub mod normalize;
pub mod warp;

pub use crate::core::{DataValue, Dimensions, ImageError, Result};
pub use map::SolarMap;
pub use normalize::{to_norm, un_norm, IntensityRange};
pub use warp::warp;
