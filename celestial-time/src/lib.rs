//! Time instants for solar rotation work.
//!
//! Observation times are carried as [`TT`] instants backed by a two-part
//! [`JulianDate`]. Differences between instants are [`Duration`]s from
//! `celestial-core`, which is what the rotation laws consume.
//!
//! ```
//! use celestial_time::TT;
//!
//! let start: TT = "2010-09-10T12:00:00".parse().unwrap();
//! let end: TT = "2010-09-12T12:00:00".parse().unwrap();
//! assert!(((end - start).days() - 2.0).abs() < 1e-9);
//! assert_eq!(end.to_iso8601(), "2010-09-12T12:00:00.000");
//! ```

pub mod constants;
pub mod julian;
pub mod parsing;
pub mod scales;

pub use celestial_core::Duration;
pub use julian::JulianDate;
pub use scales::{tt_from_calendar, TT};

use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

impl TimeError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError(message.into())
    }

    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate(message.into())
    }
}

impl From<celestial_core::AstroError> for TimeError {
    fn from(err: celestial_core::AstroError) -> Self {
        TimeError::CalculationError(err.to_string())
    }
}
