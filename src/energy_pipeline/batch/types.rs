use serde::Serialize;

use crate::energy_pipeline::aggregate::{AggregateOutput, DEFAULT_BRIGHT_THRESHOLD};
use crate::energy_pipeline::common::error::PipelineError;

#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Bright-pixel cutoff; `None` sums every pixel.
    pub threshold: Option<u8>,
    /// Assumed ground resolution in meters per pixel, used when an area has
    /// to be estimated from image geometry.
    pub x_resolution_m: f64,
    pub y_resolution_m: f64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            threshold: Some(DEFAULT_BRIGHT_THRESHOLD),
            x_resolution_m: 1.0,
            y_resolution_m: 1.0,
        }
    }
}

impl BatchConfig {
    pub fn builder() -> BatchConfigBuilder {
        BatchConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct BatchConfigBuilder {
    threshold: Option<Option<u8>>,
    x_resolution_m: Option<f64>,
    y_resolution_m: Option<f64>,
}

impl BatchConfigBuilder {
    pub fn threshold(mut self, threshold: Option<u8>) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn x_resolution_m(mut self, resolution: f64) -> Self {
        self.x_resolution_m = Some(resolution);
        self
    }

    pub fn y_resolution_m(mut self, resolution: f64) -> Self {
        self.y_resolution_m = Some(resolution);
        self
    }

    pub fn build(self) -> BatchConfig {
        let default = BatchConfig::default();
        BatchConfig {
            threshold: self.threshold.unwrap_or(default.threshold),
            x_resolution_m: self.x_resolution_m.unwrap_or(default.x_resolution_m),
            y_resolution_m: self.y_resolution_m.unwrap_or(default.y_resolution_m),
        }
    }
}

/// Per-image outcome of a batch run. Exactly one record exists per input
/// path, in input order; `error` is set when the image failed at any stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    pub image_path: String,
    pub error: Option<String>,
    pub weighted_sum: Option<f64>,
    pub area_per_pixel: Option<f64>,
    pub normalized_area: Option<f64>,
    pub histogram: Option<Vec<u64>>,
    pub bright_count: Option<u64>,
}

impl ResultRecord {
    pub fn success(
        image_path: impl Into<String>,
        output: AggregateOutput,
        area_per_pixel: f64,
        normalized_area: f64,
    ) -> Self {
        Self {
            image_path: image_path.into(),
            error: None,
            weighted_sum: Some(output.weighted_sum),
            area_per_pixel: Some(area_per_pixel),
            normalized_area: Some(normalized_area),
            histogram: Some(output.histogram),
            bright_count: output.bright_count,
        }
    }

    pub fn failure(image_path: impl Into<String>, error: &PipelineError) -> Self {
        Self {
            image_path: image_path.into(),
            error: Some(error.to_string()),
            weighted_sum: None,
            area_per_pixel: None,
            normalized_area: None,
            histogram: None,
            bright_count: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
