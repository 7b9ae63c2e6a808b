use celestial_wcs::PixelCoord;

/// A cell that may hold no value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataValue<T> {
    Value(T),
    Null,
}

impl<T> DataValue<T> {
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            DataValue::Value(v) => Some(v),
            DataValue::Null => None,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            DataValue::Value(v) => v,
            DataValue::Null => default,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DataValue<U> {
        match self {
            DataValue::Value(v) => DataValue::Value(f(v)),
            DataValue::Null => DataValue::Null,
        }
    }
}

impl<T> From<Option<T>> for DataValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => DataValue::Value(v),
            None => DataValue::Null,
        }
    }
}

/// Image size in pixels: `width` along a row (x), `height` rows (y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width(self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(self) -> usize {
        self.height
    }

    #[inline]
    pub fn len(self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Row-major offset of `(row, col)`.
    #[inline]
    pub fn index(self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Grows both sides of each axis by the given number of pixels.
    pub fn padded(self, pad_x: usize, pad_y: usize) -> Self {
        Self::new(self.width + 2 * pad_x, self.height + 2 * pad_y)
    }

    /// Every pixel centre in row-major order.
    pub fn pixels(self) -> Vec<PixelCoord> {
        (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| PixelCoord::from_array_index(row, col)))
            .collect()
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
