//! One-call conversion from a similarity source to TSPLIB text

use crate::error::Result;
use crate::matrix::SimilarityMatrix;
use crate::transform::DistanceTransform;
use crate::tsplib::{FullMatrixSerializer, TsplibDocument};
use log::info;
use std::borrow::Cow;
use std::path::PathBuf;

/// Anything that can hand over an in-memory similarity matrix
///
/// Sources that already hold a matrix lend it; loaders return an owned one.
pub trait MatrixSource {
    fn similarity_matrix(&self) -> Result<Cow<'_, SimilarityMatrix>>;
}

impl MatrixSource for SimilarityMatrix {
    fn similarity_matrix(&self) -> Result<Cow<'_, SimilarityMatrix>> {
        Ok(Cow::Borrowed(self))
    }
}

/// A square greyscale or float image on disk holding the similarities
#[derive(Debug, Clone)]
pub struct ImageFileSource {
    pub path: PathBuf,
}

impl ImageFileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl MatrixSource for ImageFileSource {
    fn similarity_matrix(&self) -> Result<Cow<'_, SimilarityMatrix>> {
        SimilarityMatrix::from_file(&self.path).map(Cow::Owned)
    }
}

/// Pull the matrix from `source` and serialise it with `transform` applied.
pub fn convert_to_document<S, T>(
    source: &S,
    serializer: &FullMatrixSerializer,
    transform: &T,
) -> Result<TsplibDocument>
where
    S: MatrixSource + ?Sized,
    T: DistanceTransform + ?Sized,
{
    let matrix = source.similarity_matrix()?;
    let document = serializer.serialize(&matrix, transform)?;
    info!(
        "Converted {} similarities into a TSPLIB problem of dimension {}",
        matrix.dimension() * matrix.dimension(),
        document.dimension()
    );
    Ok(document)
}

/// Same as [`convert_to_document`], rendered as newline separated text.
pub fn convert_matrix<S, T>(
    source: &S,
    serializer: &FullMatrixSerializer,
    transform: &T,
) -> Result<String>
where
    S: MatrixSource + ?Sized,
    T: DistanceTransform + ?Sized,
{
    convert_to_document(source, serializer, transform).map(|document| document.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionError;
    use crate::transform::SigmoidDistanceTransform;

    struct Ragged;

    impl MatrixSource for Ragged {
        fn similarity_matrix(&self) -> Result<Cow<'_, SimilarityMatrix>> {
            SimilarityMatrix::from_rows(vec![vec![1.0, 0.0], vec![1.0]]).map(Cow::Owned)
        }
    }

    #[test]
    fn matches_direct_serialisation() {
        let matrix = SimilarityMatrix::from_rows(vec![vec![1.0, 0.001], vec![0.001, 1.0]]).unwrap();
        let transform = SigmoidDistanceTransform::new(1000.0, 0.0, 1_000_000.0);
        let serializer = FullMatrixSerializer::default();

        let text = convert_matrix(&matrix, &serializer, &transform).unwrap();
        let direct = serializer.serialize(&matrix, &transform).unwrap();
        assert_eq!(text, direct.to_string());
    }

    #[test]
    fn in_memory_matrices_are_lent_not_copied() {
        let matrix = SimilarityMatrix::from_rows(vec![vec![1.0, 0.5], vec![0.5, 1.0]]).unwrap();
        let lent = matrix.similarity_matrix().unwrap();
        assert!(matches!(lent, Cow::Borrowed(_)));
        assert!(std::ptr::eq(lent.as_ref(), &matrix));
    }

    #[test]
    fn source_errors_propagate_unchanged() {
        let transform = SigmoidDistanceTransform::new(1.0, 0.0, 1.0);
        let err = convert_matrix(&Ragged, &FullMatrixSerializer::default(), &transform).unwrap_err();
        assert!(matches!(err, ConversionError::MalformedMatrix(_)));
    }

    #[test]
    fn serializer_errors_propagate_unchanged() {
        let matrix = SimilarityMatrix::from_rows(vec![vec![f64::INFINITY]]).unwrap();
        let transform = SigmoidDistanceTransform::new(1.0, 0.0, 1.0);
        let err = convert_to_document(&matrix, &FullMatrixSerializer::default(), &transform)
            .unwrap_err();
        assert!(matches!(err, ConversionError::NonFiniteValue { row: 0, col: 0, .. }));
    }

    #[test]
    fn dyn_sources_are_accepted() {
        let matrix = SimilarityMatrix::from_rows(vec![vec![0.0]]).unwrap();
        let source: &dyn MatrixSource = &matrix;
        let text = convert_matrix(source, &FullMatrixSerializer::default(), &|_: f64| 3.0).unwrap();
        assert!(text.contains("EDGE_WEIGHT_SECTION\n3\nEOF"));
    }
}
