#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Shape mismatch: {width}x{height} image needs {expected} values, got {actual}")]
    ShapeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Mask has {actual} cells, image has {expected}")]
    MaskMismatch { expected: usize, actual: usize },

    #[error("Missing metadata: {0}")]
    MissingMetadata(String),

    #[error("Invalid metadata: {0}")]
    InvalidMetadata(String),

    #[error("WCS error: {0}")]
    Wcs(#[from] celestial_wcs::WcsError),

    #[error("Coordinate error: {0}")]
    Coord(#[from] celestial_coords::CoordError),

    #[error("Time error: {0}")]
    Time(#[from] celestial_time::TimeError),
}

pub type Result<T> = std::result::Result<T, ImageError>;
