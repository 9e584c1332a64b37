use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Malformed matrix: {0}")]
    MalformedMatrix(String),

    #[error("Non-finite or out of range value {value} at ({row}, {col})")]
    NonFiniteValue { row: usize, col: usize, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("TIFF error: {0}")]
    Tiff(#[from] tiff::TiffError),

    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
