//! Energy estimation pipeline module
//!
//! This module provides a structured approach to batch energy-proxy
//! estimation, with separate modules for grayscale ingestion, area
//! resolution, normalization, intensity aggregation, and batch
//! orchestration.

pub mod aggregate;
pub mod area;
pub mod batch;
pub mod common;
pub mod gray;
pub mod normalize;


pub use common::{PipelineError, Result};

pub use gray::{GrayImageData, GrayImageReader, ImageCrateReader};

pub use aggregate::{AggregateOutput, DEFAULT_BRIGHT_THRESHOLD, HISTOGRAM_BINS};

pub use batch::{BatchConfig, BatchConfigBuilder, EnergyBatchPipeline, ResultRecord};
