//! Grayscale reader implementation backed by the image crate.
//!
//! Decodes any container format the image crate understands (PNG, JPEG,
//! TIFF, BMP, ...) and reduces it to a single luma channel. Inputs that are
//! already single-channel are rejected: the pipeline expects conventional
//! color imagery and treats anything narrower as a decode failure.

use std::path::Path;

use image::ColorType;
use tracing::debug;

use crate::energy_pipeline::common::error::{PipelineError, Result};
use crate::energy_pipeline::gray::reader::GrayImageReader;
use crate::energy_pipeline::gray::types::GrayImageData;

pub struct ImageCrateReader;

impl GrayImageReader for ImageCrateReader {
    fn read_gray(&self, path: &Path) -> Result<GrayImageData> {
        let bytes = std::fs::read(path)
            .map_err(|e| PipelineError::MissingFile(format!("{}: {}", path.display(), e)))?;

        debug!("Decoding image, {} bytes", bytes.len());

        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| PipelineError::DecodeError(format!("{}: {}", path.display(), e)))?;

        match decoded.color() {
            ColorType::L8 | ColorType::La8 | ColorType::L16 | ColorType::La16 => {
                return Err(PipelineError::DecodeError(format!(
                    "{}: expected at least 3 color channels, got {:?}",
                    path.display(),
                    decoded.color()
                )));
            }
            _ => {}
        }

        let luma = decoded.to_luma8();
        let (width, height) = luma.dimensions();

        debug!("Decoded image: {}x{}", width, height);

        Ok(GrayImageData {
            width,
            height,
            pixels: luma.into_raw(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Rgb, RgbImage};

    #[test]
    fn reads_color_png_as_grayscale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("uniform.png");

        let img = RgbImage::from_pixel(8, 6, Rgb([120, 120, 120]));
        img.save(&path).unwrap();

        let gray = ImageCrateReader.read_gray(&path).unwrap();
        assert_eq!(gray.width, 8);
        assert_eq!(gray.height, 6);
        assert_eq!(gray.pixels.len(), 48);
        // Equal channels survive any luma weighting untouched.
        assert!(gray.pixels.iter().all(|&p| p == 120));
    }

    #[test]
    fn missing_path_is_reported_as_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.png");

        let err = ImageCrateReader.read_gray(&path).unwrap_err();
        assert!(matches!(err, PipelineError::MissingFile(_)));
    }

    #[test]
    fn garbage_bytes_are_reported_as_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let err = ImageCrateReader.read_gray(&path).unwrap_err();
        assert!(matches!(err, PipelineError::DecodeError(_)));
    }

    #[test]
    fn single_channel_input_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");

        let img = GrayImage::from_pixel(4, 4, image::Luma([42]));
        img.save(&path).unwrap();

        let err = ImageCrateReader.read_gray(&path).unwrap_err();
        assert!(matches!(err, PipelineError::DecodeError(_)));
    }
}
