//! Similarity matrix to TSPLIB conversion
//!
//! Turns a square matrix of pairwise similarity scores (for example the
//! inlier ratios of registering every pair of sections in a stack) into an
//! explicit `FULL_MATRIX` TSPLIB problem. A TSP solver run on that problem
//! recovers an ordering in which similar items end up next to each other.
//!
//! ## Pipeline
//!
//! 1. **Matrix acquisition** (`matrix`)
//!    - A [`SimilarityMatrix`] is built from rows, row-major data or a square
//!      greyscale/float image on disk.
//!
//! 2. **Similarity to distance** (`transform`)
//!    - A [`DistanceTransform`] maps each similarity to a distance. The
//!      provided [`SigmoidDistanceTransform`] is a decreasing logistic curve.
//!
//! 3. **Serialization** (`tsplib`)
//!    - [`FullMatrixSerializer`] rounds every distance to an integer and
//!      renders the header, `EDGE_WEIGHT_SECTION` and `EOF` trailer.
//!
//! [`convert_matrix`] runs all three steps in one call:
//!
//! ```
//! use similarity_tsplib::{convert_matrix, FullMatrixSerializer, SigmoidDistanceTransform, SimilarityMatrix};
//!
//! let matrix = SimilarityMatrix::from_rows(vec![vec![1.0, 0.001], vec![0.001, 1.0]])?;
//! let transform = SigmoidDistanceTransform::new(1000.0, 0.0, 1_000_000.0);
//! let text = convert_matrix(&matrix, &FullMatrixSerializer::default(), &transform)?;
//! assert!(text.contains("0 268941\n268941 0"));
//! # Ok::<(), similarity_tsplib::ConversionError>(())
//! ```
//!
//! ## Features
//!
//! - `parallel`: transform matrix rows on the rayon thread pool. Row order in
//!   the output is unchanged. Run the suite with `cargo test --features parallel`
//!   as well as without it, since the two builds compile different code paths.

pub mod convert;
pub mod error;
pub mod matrix;
pub mod transform;
pub mod tsplib;

pub use convert::{convert_matrix, convert_to_document, ImageFileSource, MatrixSource};
pub use error::{ConversionError, Result};
pub use matrix::SimilarityMatrix;
pub use transform::{DistanceTransform, SigmoidDistanceTransform};
pub use tsplib::{FullMatrixSerializer, Rounding, SerializerConfig, TsplibDocument};
