//! Area resolution module
//!
//! Resolves the real-world footprint of an image in km², either from a
//! caller-supplied value, a marker embedded in the file name, or a geometric
//! estimate over the binarized image.

mod estimator;
mod resolver;

pub use estimator::estimate_area_km2;
pub use resolver::{area_from_name, resolve_area};
