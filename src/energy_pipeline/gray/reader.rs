use std::path::Path;

use crate::energy_pipeline::common::error::Result;
use crate::energy_pipeline::gray::types::GrayImageData;

pub trait GrayImageReader {
    fn read_gray(&self, path: &Path) -> Result<GrayImageData>;
}
