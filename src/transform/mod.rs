//! Similarity to distance transforms
//!
//! A [`DistanceTransform`] maps one pairwise similarity score onto one edge
//! weight. Implementations must be pure: the result for a value may not depend
//! on call order or on any other cell of the matrix being converted.

pub mod sigmoid;

pub use sigmoid::SigmoidDistanceTransform;

/// Derives a distance from a pairwise similarity measure.
pub trait DistanceTransform: Send + Sync {
    fn convert(&self, similarity: f64) -> f64;
}

impl<F> DistanceTransform for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn convert(&self, similarity: f64) -> f64 {
        self(similarity)
    }
}
