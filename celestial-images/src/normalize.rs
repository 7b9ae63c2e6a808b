//! Linear rescaling of intensities to and from `[0, 1]`.

use crate::core::DataValue;

/// The intensity range of a set of cells, over defined values only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityRange {
    min: f64,
    max: f64,
}

impl IntensityRange {
    /// `None` when no cell holds a value.
    pub fn of(values: &[DataValue<f64>]) -> Option<Self> {
        values
            .iter()
            .filter_map(|v| v.value().copied())
            .fold(None, |acc: Option<Self>, v| match acc {
                None => Some(Self { min: v, max: v }),
                Some(r) => Some(Self {
                    min: r.min.min(v),
                    max: r.max.max(v),
                }),
            })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    fn span(&self) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 {
            span
        } else {
            1.0
        }
    }
}

/// Maps defined values onto `[0, 1]`. A constant image maps to all zeros.
pub fn to_norm(values: &[DataValue<f64>], range: &IntensityRange) -> Vec<DataValue<f64>> {
    let span = range.span();
    values
        .iter()
        .map(|v| v.map(|x| (x - range.min) / span))
        .collect()
}

/// Inverse of [`to_norm`].
pub fn un_norm(values: &[DataValue<f64>], range: &IntensityRange) -> Vec<DataValue<f64>> {
    let span = range.span();
    values
        .iter()
        .map(|v| v.map(|x| x * span + range.min))
        .collect()
}
