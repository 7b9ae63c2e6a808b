pub mod errors;
pub mod types;

pub use errors::{ImageError, Result};
pub use types::{DataValue, Dimensions};
