use crate::transform::DistanceTransform;

/// Logistic similarity to distance mapping
///
/// distance = amplitude / (1 + exp(scale * (similarity - offset)))
///
/// For a positive `scale` the distance decreases as similarity grows: it
/// approaches `amplitude` for very dissimilar pairs, equals `amplitude / 2` at
/// `offset` and tends to zero for very similar pairs. An overflowing
/// exponential saturates to `0.0` and an underflowing one to `amplitude`, so
/// finite inputs always give a value in `[0, amplitude]`.
///
/// NaN similarities propagate to a NaN distance. `-inf` maps to `amplitude`
/// and `+inf` to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SigmoidDistanceTransform {
    scale: f64,
    offset: f64,
    amplitude: f64,
}

impl SigmoidDistanceTransform {
    pub fn new(scale: f64, offset: f64, amplitude: f64) -> Self {
        Self {
            scale,
            offset,
            amplitude,
        }
    }

    /// Steepness of the curve around `offset`
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Upper bound of the produced distances
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl DistanceTransform for SigmoidDistanceTransform {
    fn convert(&self, similarity: f64) -> f64 {
        let exponent = self.scale * (similarity - self.offset);
        self.amplitude / (1.0 + exponent.exp())
    }
}
