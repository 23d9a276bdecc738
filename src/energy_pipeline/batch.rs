//! Batch orchestration module
//!
//! This module contains the two-pass batch pipeline: a sizing pass resolving
//! areas and decoding images, a normalization step against the batch
//! maximum, and an aggregation pass assembling one result record per input.

mod pipeline;
mod types;

pub use pipeline::EnergyBatchPipeline;
pub use types::{BatchConfig, BatchConfigBuilder, ResultRecord};
