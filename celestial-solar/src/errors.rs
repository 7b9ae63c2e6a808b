use celestial_coords::CoordError;
use celestial_images::ImageError;
use thiserror::Error;

pub type SolarResult<T> = Result<T, SolarError>;

#[derive(Debug, Error)]
pub enum SolarError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Coordinate error: {source}")]
    Coord {
        #[from]
        source: CoordError,
    },

    #[error("Image error: {source}")]
    Image {
        #[from]
        source: ImageError,
    },
}

impl SolarError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
