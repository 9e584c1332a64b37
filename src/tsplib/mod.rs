//! TSPLIB full-matrix serialization
//!
//! Produces the explicit `FULL_MATRIX` flavour of a TSPLIB problem:
//!
//! ```text
//! NAME: similarity
//! TYPE: TSP
//! DIMENSION: 3
//! EDGE_WEIGHT_TYPE: EXPLICIT
//! EDGE_WEIGHT_FORMAT: FULL_MATRIX
//! EDGE_WEIGHT_SECTION
//! 0 268941 6693
//! 268941 0 119203
//! 6693 119203 0
//! EOF
//! ```
//!
//! Every similarity is passed through a [`DistanceTransform`] and rounded to an
//! integer. The layout depends only on the matrix dimension and the
//! [`SerializerConfig`], never on the values.

pub mod document;

pub use document::TsplibDocument;

use crate::error::{ConversionError, Result};
use crate::matrix::SimilarityMatrix;
use crate::transform::DistanceTransform;
use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How transformed distances become integer edge weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Round half away from zero
    #[default]
    Nearest,
    /// Drop the fractional part
    Truncate,
}

impl Rounding {
    fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::Nearest => value.round(),
            Rounding::Truncate => value.trunc(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SerializerConfig {
    /// Value of the `NAME` header
    pub name: String,
    /// Optional `COMMENT` header
    pub comment: Option<String>,
    pub rounding: Rounding,
    /// Append a dummy node at zero distance from every other node, so that an
    /// optimal tour cut at the dummy is an optimal open path.
    pub open_path: bool,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            name: "similarity".to_string(),
            comment: None,
            rounding: Rounding::Nearest,
            open_path: false,
        }
    }
}

/// Writes similarity matrices as TSPLIB `FULL_MATRIX` problems
#[derive(Debug, Clone, Default)]
pub struct FullMatrixSerializer {
    config: SerializerConfig,
}

impl FullMatrixSerializer {
    pub fn new(config: SerializerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SerializerConfig {
        &self.config
    }

    /// Transform every cell and render the full document.
    ///
    /// All weights are computed and checked before any text is produced, so a
    /// failure never yields a partial document.
    pub fn serialize<T>(&self, matrix: &SimilarityMatrix, transform: &T) -> Result<TsplibDocument>
    where
        T: DistanceTransform + ?Sized,
    {
        let n = matrix.dimension();
        let dimension = if self.config.open_path { n + 1 } else { n };
        debug!(
            "Serialising {}x{} similarity matrix (dimension {}, rounding {:?})",
            n, n, dimension, self.config.rounding
        );

        let weights = self.edge_weights(matrix, transform)?;

        let mut rows: Vec<String> = weights
            .chunks_exact(n)
            .map(|row| {
                let mut line = join_weights(row);
                if self.config.open_path {
                    line.push_str(" 0");
                }
                line
            })
            .collect();
        if self.config.open_path {
            rows.push(vec!["0"; dimension].join(" "));
        }

        Ok(TsplibDocument::new(self.header(dimension), rows, dimension))
    }

    fn header(&self, dimension: usize) -> Vec<String> {
        let mut header = vec![format!("NAME: {}", self.config.name)];
        if let Some(comment) = &self.config.comment {
            header.push(format!("COMMENT: {}", comment));
        }
        header.push("TYPE: TSP".to_string());
        header.push(format!("DIMENSION: {}", dimension));
        header.push("EDGE_WEIGHT_TYPE: EXPLICIT".to_string());
        header.push("EDGE_WEIGHT_FORMAT: FULL_MATRIX".to_string());
        header
    }

    #[cfg(not(feature = "parallel"))]
    fn edge_weights<T>(&self, matrix: &SimilarityMatrix, transform: &T) -> Result<Vec<i64>>
    where
        T: DistanceTransform + ?Sized,
    {
        let n = matrix.dimension();
        matrix
            .as_slice()
            .iter()
            .enumerate()
            .map(|(index, &similarity)| {
                self.edge_weight(index / n, index % n, similarity, transform)
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn edge_weights<T>(&self, matrix: &SimilarityMatrix, transform: &T) -> Result<Vec<i64>>
    where
        T: DistanceTransform + ?Sized,
    {
        let n = matrix.dimension();
        let rows: Vec<Vec<i64>> = matrix
            .as_slice()
            .par_chunks_exact(n)
            .enumerate()
            .map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .map(|(col, &similarity)| self.edge_weight(row, col, similarity, transform))
                    .collect::<Result<Vec<i64>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(rows.into_iter().flatten().collect())
    }

    fn edge_weight<T>(&self, row: usize, col: usize, similarity: f64, transform: &T) -> Result<i64>
    where
        T: DistanceTransform + ?Sized,
    {
        if !similarity.is_finite() {
            return Err(ConversionError::NonFiniteValue {
                row,
                col,
                value: similarity,
            });
        }

        let distance = self.config.rounding.apply(transform.convert(similarity));
        // i64::MAX as f64 rounds up to 2^63, which is already out of range.
        if !distance.is_finite() || distance >= i64::MAX as f64 || distance < i64::MIN as f64 {
            return Err(ConversionError::NonFiniteValue {
                row,
                col,
                value: distance,
            });
        }
        Ok(distance as i64)
    }
}

fn join_weights(row: &[i64]) -> String {
    row.iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
