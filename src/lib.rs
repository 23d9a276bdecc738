//! Area-weighted energy proxy estimation from raster imagery.
//!
//! The crate turns a batch of images plus their real-world footprints into
//! comparable per-image intensity scores: each image is decoded to grayscale,
//! its area in km² is resolved (caller value, filename marker, or geometric
//! estimate), per-pixel areas are normalized against the batch maximum, and
//! an area-weighted intensity sum plus a 256-bin histogram is produced per
//! image. See [`energy_pipeline::EnergyBatchPipeline`] for the entry point.

pub mod energy_pipeline;
pub mod logger;
