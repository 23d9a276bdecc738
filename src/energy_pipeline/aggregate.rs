//! Intensity aggregation: histograms and area-weighted sums.

use crate::energy_pipeline::gray::GrayImageData;

pub const HISTOGRAM_BINS: usize = 256;

/// Intensity a pixel must strictly exceed to count as bright.
pub const DEFAULT_BRIGHT_THRESHOLD: u8 = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateOutput {
    pub weighted_sum: f64,
    pub bright_count: Option<u64>,
    pub histogram: Vec<u64>,
}

/// Computes the 256-bin intensity histogram and the area-weighted intensity
/// sum in one pass. With a threshold, only pixels strictly above it
/// participate in the sum and their count is reported; without one every
/// pixel participates and `bright_count` stays `None`. The histogram always
/// covers every pixel.
pub fn aggregate(
    image: &GrayImageData,
    normalized_area: f64,
    threshold: Option<u8>,
) -> AggregateOutput {
    let mut histogram = vec![0u64; HISTOGRAM_BINS];
    let mut intensity_sum = 0u64;
    let mut qualifying = 0u64;

    for &value in &image.pixels {
        histogram[value as usize] += 1;

        if threshold.is_none_or(|limit| value > limit) {
            intensity_sum += value as u64;
            qualifying += 1;
        }
    }

    AggregateOutput {
        weighted_sum: intensity_sum as f64 * normalized_area,
        bright_count: threshold.map(|_| qualifying),
        histogram,
    }
}
