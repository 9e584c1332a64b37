//! Square pairwise similarity matrices
//!
//! Values are stored row-major. Symmetry is expected by convention but never
//! enforced; [`SimilarityMatrix::is_symmetric`] is there for diagnostics.

pub mod loader;

use crate::error::{ConversionError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    data: Vec<f64>,
    dimension: usize,
}

impl SimilarityMatrix {
    /// Build a matrix from nested rows. Every row must be as long as there are rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let dimension = rows.len();
        if dimension == 0 {
            return Err(ConversionError::MalformedMatrix(
                "matrix has no rows".to_string(),
            ));
        }

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != dimension) {
            return Err(ConversionError::MalformedMatrix(format!(
                "row {} has {} entries, expected {}",
                index,
                row.len(),
                dimension
            )));
        }

        let data = rows.into_iter().flatten().collect();
        Ok(Self { data, dimension })
    }

    /// Build a matrix from `dimension * dimension` row-major values.
    pub fn from_row_major(data: Vec<f64>, dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(ConversionError::MalformedMatrix(
                "dimension must be at least 1".to_string(),
            ));
        }

        let expected = dimension.checked_mul(dimension).ok_or_else(|| {
            ConversionError::MalformedMatrix(format!("dimension {} is too large", dimension))
        })?;
        if data.len() != expected {
            return Err(ConversionError::MalformedMatrix(format!(
                "{} values cannot form a {}x{} matrix",
                data.len(),
                dimension,
                dimension
            )));
        }

        Ok(Self { data, dimension })
    }

    /// Build a matrix from image-shaped pixel data. The image must be square.
    pub fn from_image_data(width: u32, height: u32, data: Vec<f64>) -> Result<Self> {
        if width != height {
            return Err(ConversionError::MalformedMatrix(format!(
                "image of {}x{} pixels is not square",
                width, height
            )));
        }
        Self::from_row_major(data, width as usize)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Similarity between `row` and `col`, `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.dimension && col < self.dimension {
            Some(self.data[row * self.dimension + col])
        } else {
            None
        }
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index < self.dimension {
            let start = index * self.dimension;
            Some(&self.data[start..start + self.dimension])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.dimension)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (0..self.dimension).all(|i| {
            (i + 1..self.dimension).all(|j| {
                let a = self.data[i * self.dimension + j];
                let b = self.data[j * self.dimension + i];
                (a - b).abs() <= tolerance
            })
        })
    }
}
