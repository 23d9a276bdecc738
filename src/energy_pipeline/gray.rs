//! Grayscale image ingestion module
//!
//! This module provides decoder-agnostic grayscale image loading.

mod image_reader;
mod reader;
pub mod types;

pub use image_reader::ImageCrateReader;
pub use reader::GrayImageReader;
pub use types::GrayImageData;
