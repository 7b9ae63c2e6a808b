use thiserror::Error;

pub type WcsResult<T> = Result<T, WcsError>;

#[derive(Debug, Error)]
pub enum WcsError {
    #[error("Missing required WCS keyword: {keyword}")]
    MissingKeyword { keyword: String },

    #[error("Invalid WCS keyword '{keyword}': {message}")]
    InvalidKeyword { keyword: String, message: String },

    #[error("Unsupported projection: {code}")]
    UnsupportedProjection { code: String },

    #[error("Non-invertible matrix (determinant = {determinant})")]
    NonInvertibleMatrix { determinant: f64 },

    #[error("Coordinate error: {source}")]
    CoordinateError {
        #[from]
        source: celestial_coords::CoordError,
    },
}

impl WcsError {
    pub fn missing_keyword(keyword: impl Into<String>) -> Self {
        Self::MissingKeyword {
            keyword: keyword.into(),
        }
    }

    pub fn invalid_keyword(keyword: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidKeyword {
            keyword: keyword.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_projection(code: impl Into<String>) -> Self {
        Self::UnsupportedProjection { code: code.into() }
    }

    pub fn non_invertible_matrix(determinant: f64) -> Self {
        Self::NonInvertibleMatrix { determinant }
    }
}
