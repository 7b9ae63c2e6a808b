/// A position in the pixel grid, 0-based: the centre of the first pixel is
/// `(0, 0)`, `x` runs along a row and `y` down the rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelCoord {
    x: f64,
    y: f64,
}

impl PixelCoord {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn from_array_index(row: usize, col: usize) -> Self {
        Self {
            x: col as f64,
            y: row as f64,
        }
    }

    /// `(row, col)` of the nearest pixel centre, if it lies inside a grid of
    /// the given `(width, height)`.
    pub fn to_array_index(&self, width: usize, height: usize) -> Option<(usize, usize)> {
        if !self.is_finite() {
            return None;
        }
        let col = self.x.round();
        let row = self.y.round();
        if col < 0.0 || row < 0.0 || col >= width as f64 || row >= height as f64 {
            return None;
        }
        Some((row as usize, col as usize))
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Projection-plane coordinates, in the units of `CUNITi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntermediateCoord {
    x: f64,
    y: f64,
}

impl IntermediateCoord {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }
}
