use crate::coordinate::{IntermediateCoord, PixelCoord};
use crate::error::{WcsError, WcsResult};

const DETERMINANT_THRESHOLD: f64 = 1e-15;

/// Pixel to projection-plane mapping (WCS Paper I, eq. 1).
///
/// `crpix` is the FITS reference pixel, 1-based. Pixel coordinates passed in
/// and out are 0-based, so pixel `p` sits at FITS position `p + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTransform {
    crpix: [f64; 2],
    cd: [[f64; 2]; 2],
    cd_inverse: [[f64; 2]; 2],
    determinant: f64,
}

impl LinearTransform {
    pub fn from_cd(crpix: [f64; 2], cd: [[f64; 2]; 2]) -> WcsResult<Self> {
        let determinant = cd[0][0] * cd[1][1] - cd[0][1] * cd[1][0];
        if determinant.is_nan() || determinant.abs() < DETERMINANT_THRESHOLD {
            return Err(WcsError::non_invertible_matrix(determinant));
        }
        let cd_inverse = compute_inverse(cd, determinant);
        Ok(Self {
            crpix,
            cd,
            cd_inverse,
            determinant,
        })
    }

    pub fn from_pc_cdelt(crpix: [f64; 2], pc: [[f64; 2]; 2], cdelt: [f64; 2]) -> WcsResult<Self> {
        let cd = [
            [cdelt[0] * pc[0][0], cdelt[0] * pc[0][1]],
            [cdelt[1] * pc[1][0], cdelt[1] * pc[1][1]],
        ];
        Self::from_cd(crpix, cd)
    }

    /// Axis-aligned grid with per-axis scale.
    pub fn from_cdelt(crpix: [f64; 2], cdelt: [f64; 2]) -> WcsResult<Self> {
        Self::from_pc_cdelt(crpix, [[1.0, 0.0], [0.0, 1.0]], cdelt)
    }

    pub fn pixel_to_intermediate(&self, pixel: PixelCoord) -> IntermediateCoord {
        let d0 = pixel.x() + 1.0 - self.crpix[0];
        let d1 = pixel.y() + 1.0 - self.crpix[1];
        let x = self.cd[0][0] * d0 + self.cd[0][1] * d1;
        let y = self.cd[1][0] * d0 + self.cd[1][1] * d1;
        IntermediateCoord::new(x, y)
    }

    pub fn intermediate_to_pixel(&self, inter: IntermediateCoord) -> PixelCoord {
        let x = inter.x();
        let y = inter.y();
        let px = self.cd_inverse[0][0] * x + self.cd_inverse[0][1] * y + self.crpix[0] - 1.0;
        let py = self.cd_inverse[1][0] * x + self.cd_inverse[1][1] * y + self.crpix[1] - 1.0;
        PixelCoord::new(px, py)
    }

    #[inline]
    pub fn crpix(&self) -> [f64; 2] {
        self.crpix
    }

    #[inline]
    pub fn cd_matrix(&self) -> [[f64; 2]; 2] {
        self.cd
    }

    /// Geometric-mean pixel size, in intermediate units.
    #[inline]
    pub fn pixel_scale(&self) -> f64 {
        libm::sqrt(self.determinant.abs())
    }
}

fn compute_inverse(m: [[f64; 2]; 2], det: f64) -> [[f64; 2]; 2] {
    let inv_det = 1.0 / det;
    [
        [m[1][1] * inv_det, -m[0][1] * inv_det],
        [-m[1][0] * inv_det, m[0][0] * inv_det],
    ]
}
