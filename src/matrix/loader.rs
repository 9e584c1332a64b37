use crate::error::{ConversionError, Result};
use crate::matrix::SimilarityMatrix;
use image::{DynamicImage, GenericImageView};
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tiff::decoder::{Decoder, DecodingResult};

impl SimilarityMatrix {
    /// Load a similarity matrix stored as a square single-channel image.
    ///
    /// Greyscale TIFFs (including 32 and 64 bit float ones, which `image`
    /// cannot decode) are read with the `tiff` decoder directly. Everything
    /// else goes through `image::open`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let matrix = match Self::read_greyscale_tiff(path)? {
            Some(matrix) => matrix,
            None => Self::from_dynamic_image(image::open(path)?)?,
        };
        info!(
            "Loaded {}x{} similarity matrix from {}",
            matrix.dimension(),
            matrix.dimension(),
            path.display()
        );
        Ok(matrix)
    }

    /// Convert pixel intensities to similarity values.
    ///
    /// Integer greyscale is normalised to [0,1]. Float images keep their values
    /// untouched, taking the first channel as the similarity.
    pub fn from_dynamic_image(img: DynamicImage) -> Result<Self> {
        let (width, height) = img.dimensions();

        let data: Vec<f64> = match img {
            DynamicImage::ImageLuma8(img) => img.pixels().map(|p| p[0] as f64 / 255.0).collect(),
            DynamicImage::ImageLuma16(img) => {
                img.pixels().map(|p| p[0] as f64 / 65535.0).collect()
            }
            DynamicImage::ImageRgb32F(img) => img.pixels().map(|p| p[0] as f64).collect(),
            DynamicImage::ImageRgba32F(img) => img.pixels().map(|p| p[0] as f64).collect(),
            other => other.to_luma32f().pixels().map(|p| p[0] as f64).collect(),
        };

        Self::from_image_data(width, height, data)
    }

    /// `Ok(None)` when `path` is not a greyscale TIFF and should be handed to `image`.
    fn read_greyscale_tiff(path: &Path) -> Result<Option<Self>> {
        let is_tiff = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tif") || ext.eq_ignore_ascii_case("tiff"));
        if !is_tiff {
            return Ok(None);
        }

        let mut decoder = Decoder::new(BufReader::new(File::open(path)?))?;
        let colortype = decoder.colortype()?;
        if !matches!(colortype, tiff::ColorType::Gray(_)) {
            debug!("{} is a {:?} TIFF, decoding with image", path.display(), colortype);
            return Ok(None);
        }

        let (width, height) = decoder.dimensions()?;
        let data: Vec<f64> = match decoder.read_image()? {
            DecodingResult::U8(values) => values.into_iter().map(|v| v as f64 / 255.0).collect(),
            DecodingResult::U16(values) => {
                values.into_iter().map(|v| v as f64 / 65535.0).collect()
            }
            DecodingResult::F32(values) => values.into_iter().map(f64::from).collect(),
            DecodingResult::F64(values) => values,
            _ => {
                return Err(ConversionError::UnsupportedImage(format!(
                    "{}: {:?} TIFF samples",
                    path.display(),
                    colortype
                )))
            }
        };

        Self::from_image_data(width, height, data).map(Some)
    }
}
