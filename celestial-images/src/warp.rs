//! Resampling through an inverse coordinate map.
//!
//! [`warp`] asks the caller, once, where every output pixel comes from in the
//! source image and samples the source bilinearly there. Sources that are
//! `None`, fall outside the image, or touch a null cell give a null output.

use celestial_wcs::PixelCoord;
use rayon::prelude::*;

use crate::core::{DataValue, Dimensions};

/// Sub-pixel slack allowed at the image border.
const EDGE_TOLERANCE: f64 = 1e-9;

/// Resamples `source` onto an output grid of the same size.
///
/// `inverse_map` receives every output pixel centre in row-major order and
/// returns the matching source positions in the same order.
pub fn warp<F>(source: &[DataValue<f64>], dimensions: Dimensions, inverse_map: F) -> Vec<DataValue<f64>>
where
    F: Fn(&[PixelCoord]) -> Vec<Option<PixelCoord>>,
{
    let targets = dimensions.pixels();
    let sources = inverse_map(&targets);

    sources
        .par_iter()
        .map(|s| match s {
            Some(p) => sample_bilinear(source, dimensions, *p),
            None => DataValue::Null,
        })
        .collect()
}

/// Bilinear sample at a 0-based pixel position.
pub fn sample_bilinear(data: &[DataValue<f64>], dimensions: Dimensions, p: PixelCoord) -> DataValue<f64> {
    if !p.is_finite() || dimensions.is_empty() {
        return DataValue::Null;
    }
    let max_x = (dimensions.width() - 1) as f64;
    let max_y = (dimensions.height() - 1) as f64;
    if p.x() < -EDGE_TOLERANCE
        || p.y() < -EDGE_TOLERANCE
        || p.x() > max_x + EDGE_TOLERANCE
        || p.y() > max_y + EDGE_TOLERANCE
    {
        return DataValue::Null;
    }

    let x = p.x().clamp(0.0, max_x);
    let y = p.y().clamp(0.0, max_y);
    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;
    let x1 = (x0 + 1).min(dimensions.width() - 1);
    let y1 = (y0 + 1).min(dimensions.height() - 1);

    let corners = [
        (y0, x0, (1.0 - fx) * (1.0 - fy)),
        (y0, x1, fx * (1.0 - fy)),
        (y1, x0, (1.0 - fx) * fy),
        (y1, x1, fx * fy),
    ];

    let mut sum = 0.0;
    for (row, col, weight) in corners {
        if weight == 0.0 {
            continue;
        }
        match data[dimensions.index(row, col)] {
            DataValue::Value(v) => sum += weight * v,
            DataValue::Null => return DataValue::Null,
        }
    }
    DataValue::Value(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use DataValue::{Null, Value};

    fn grid() -> (Vec<DataValue<f64>>, Dimensions) {
        let dims = Dimensions::new(3, 2);
        let data = (0..6).map(|i| Value(i as f64)).collect();
        (data, dims)
    }

    #[test]
    fn identity_map_reproduces_input() {
        let (data, dims) = grid();
        let out = warp(&data, dims, |pixels| pixels.iter().map(|&p| Some(p)).collect());
        assert_eq!(out, data);
    }

    #[test]
    fn bilinear_midpoint() {
        let (data, dims) = grid();
        let v = sample_bilinear(&data, dims, PixelCoord::new(0.5, 0.5));
        assert_eq!(v, Value(2.0));
        let v = sample_bilinear(&data, dims, PixelCoord::new(1.25, 0.0));
        assert_eq!(v, Value(1.25));
    }

    #[test]
    fn outside_and_none_are_null() {
        let (data, dims) = grid();
        assert_eq!(sample_bilinear(&data, dims, PixelCoord::new(-0.5, 0.0)), Null);
        assert_eq!(sample_bilinear(&data, dims, PixelCoord::new(2.0, 1.5)), Null);
        assert_eq!(sample_bilinear(&data, dims, PixelCoord::new(f64::NAN, 0.0)), Null);

        let out = warp(&data, dims, |pixels| vec![None; pixels.len()]);
        assert!(out.iter().all(DataValue::is_null));
    }

    #[test]
    fn last_row_and_column_are_reachable() {
        let (data, dims) = grid();
        assert_eq!(sample_bilinear(&data, dims, PixelCoord::new(2.0, 1.0)), Value(5.0));
    }

    #[test]
    fn null_neighbour_poisons_sample() {
        let (mut data, dims) = grid();
        data[4] = Null;
        assert_eq!(sample_bilinear(&data, dims, PixelCoord::new(0.5, 0.5)), Null);
        // Exactly on a defined pixel the null neighbour has no weight.
        assert_eq!(sample_bilinear(&data, dims, PixelCoord::new(0.0, 1.0)), Value(3.0));
    }

    #[test]
    fn shift_map_moves_content() {
        let (data, dims) = grid();
        let out = warp(&data, dims, |pixels| {
            pixels
                .iter()
                .map(|p| Some(PixelCoord::new(p.x() + 1.0, p.y())))
                .collect()
        });
        assert_eq!(out, vec![Value(1.0), Value(2.0), Null, Value(4.0), Value(5.0), Null]);
    }
}
