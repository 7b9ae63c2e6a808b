use celestial_core::AstroError;
use thiserror::Error;

pub type CoordResult<T> = Result<T, CoordError>;

#[derive(Debug, Error)]
pub enum CoordError {
    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    #[error("Invalid distance: {message}")]
    InvalidDistance { message: String },

    #[error("Invalid observer: {message}")]
    InvalidObserver { message: String },

    #[error("Epoch conversion failed: {source}")]
    EpochError {
        #[from]
        source: celestial_time::TimeError,
    },

    #[error("Core astronomical calculation failed: {message}")]
    CoreError { message: String },
}

impl CoordError {
    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }

    pub fn invalid_distance(message: impl Into<String>) -> Self {
        Self::InvalidDistance {
            message: message.into(),
        }
    }

    pub fn invalid_observer(message: impl Into<String>) -> Self {
        Self::InvalidObserver {
            message: message.into(),
        }
    }

    pub fn from_core(error: AstroError) -> Self {
        Self::CoreError {
            message: error.to_string(),
        }
    }
}

impl From<AstroError> for CoordError {
    fn from(error: AstroError) -> Self {
        Self::from_core(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::MathErrorKind;

    #[test]
    fn test_constructors_format() {
        let err = CoordError::invalid_observer("inside the Sun");
        assert_eq!(err.to_string(), "Invalid observer: inside the Sun");

        let err = CoordError::invalid_distance("negative");
        assert!(matches!(err, CoordError::InvalidDistance { .. }));
    }

    #[test]
    fn test_from_core_error() {
        let core = AstroError::math_error("validate_latitude", MathErrorKind::OutOfRange, "95°");
        let err: CoordError = core.into();
        assert!(err.to_string().contains("validate_latitude"));
    }

    #[test]
    fn test_from_time_error() {
        let err: CoordError = celestial_time::TimeError::parse("bad").into();
        assert!(matches!(err, CoordError::EpochError { .. }));
    }
}
