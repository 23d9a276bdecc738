use std::path::Path;

use tracing::{error, info, instrument, warn};

use crate::energy_pipeline::aggregate;
use crate::energy_pipeline::area;
use crate::energy_pipeline::batch::types::{BatchConfig, ResultRecord};
use crate::energy_pipeline::common::error::PipelineError;
use crate::energy_pipeline::gray::{GrayImageData, GrayImageReader, ImageCrateReader};
use crate::energy_pipeline::normalize;

/// Outcome of the sizing pass for one input, carried into the aggregation
/// pass. Keeping the decoded grid and its per-pixel area in a single entry
/// aligned with the input keeps record order correct even when neighboring
/// images fail.
struct SizedImage {
    image: GrayImageData,
    area_per_pixel: f64,
}

pub struct EnergyBatchPipeline<R: GrayImageReader> {
    reader: R,
    config: BatchConfig,
}

impl EnergyBatchPipeline<ImageCrateReader> {
    pub fn new(config: BatchConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            config,
        }
    }
}

impl<R: GrayImageReader> EnergyBatchPipeline<R> {
    pub fn with_custom(reader: R, config: BatchConfig) -> Self {
        Self { reader, config }
    }

    /// Runs the two-pass batch over `paths` and their optional areas in km².
    ///
    /// Structural failures (empty input, length mismatch) are logged and
    /// surface as an empty sequence. Otherwise exactly one record per input
    /// is returned, in input order, with per-image errors isolated to their
    /// own record.
    #[instrument(skip(self, paths, areas), fields(batch_size = paths.len()))]
    pub fn run(&self, paths: &[String], areas: &[Option<f64>]) -> Vec<ResultRecord> {
        if paths.is_empty() {
            error!("{}", PipelineError::EmptyBatch);
            return Vec::new();
        }
        if paths.len() != areas.len() {
            error!(
                "{}",
                PipelineError::BatchSizeMismatch {
                    paths: paths.len(),
                    areas: areas.len(),
                }
            );
            return Vec::new();
        }

        info!("Starting batch of {} images", paths.len());

        let mut sized: Vec<Result<SizedImage, PipelineError>> = Vec::with_capacity(paths.len());
        for (path, caller_area) in paths.iter().zip(areas) {
            let outcome = self.size_image(path, *caller_area);
            if let Err(e) = &outcome {
                warn!(path = %path, "Sizing failed: {}", e);
            }
            sized.push(outcome);
        }

        let per_pixel_areas: Vec<f64> = sized
            .iter()
            .filter_map(|outcome| outcome.as_ref().ok())
            .map(|sized_image| sized_image.area_per_pixel)
            .collect();

        let normalized = match normalize::normalize_areas(&per_pixel_areas) {
            Ok(values) => values,
            Err(e) => {
                warn!("No usable area in batch, emitting error records: {}", e);
                Vec::new()
            }
        };

        // The normalized sequence is aligned to the successful subsequence of
        // the sizing pass; consuming it in the same order restores per-input
        // alignment.
        let mut normalized_iter = normalized.into_iter();
        let mut records = Vec::with_capacity(paths.len());
        for (path, outcome) in paths.iter().zip(sized) {
            let record = match outcome {
                Ok(sized_image) => match normalized_iter.next() {
                    Some(normalized_area) => self.aggregate_image(path, &sized_image, normalized_area),
                    None => ResultRecord::failure(
                        path,
                        &PipelineError::Aggregation("no valid area in batch".to_string()),
                    ),
                },
                Err(e) => ResultRecord::failure(path, &e),
            };
            records.push(record);
        }

        info!(
            "Batch complete: {} records, {} errors",
            records.len(),
            records.iter().filter(|record| record.is_error()).count()
        );

        records
    }

    fn size_image(
        &self,
        path: &str,
        caller_area: Option<f64>,
    ) -> Result<SizedImage, PipelineError> {
        let file_name = Path::new(path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(path);

        let resolved = area::resolve_area(file_name, caller_area);
        if let Some(area_km2) = resolved
            && area_km2 < 0.0
        {
            return Err(PipelineError::InvalidArea(area_km2));
        }

        let image = self.reader.read_gray(Path::new(path))?;

        let area_km2 = match resolved {
            Some(value) => value,
            None => {
                area::estimate_area_km2(&image, self.config.x_resolution_m, self.config.y_resolution_m)
                    .ok_or_else(|| PipelineError::UnresolvedArea(path.to_string()))?
            }
        };

        let area_per_pixel = normalize::area_per_pixel(area_km2, image.width, image.height)?;

        Ok(SizedImage {
            image,
            area_per_pixel,
        })
    }

    fn aggregate_image(
        &self,
        path: &str,
        sized: &SizedImage,
        normalized_area: f64,
    ) -> ResultRecord {
        if !normalized_area.is_finite() {
            let e = PipelineError::Aggregation(format!(
                "non-finite normalized area {normalized_area}"
            ));
            error!(path = %path, "{}", e);
            return ResultRecord::failure(path, &e);
        }

        let output = aggregate::aggregate(&sized.image, normalized_area, self.config.threshold);

        info!(
            path = %path,
            weighted_sum = output.weighted_sum,
            "Aggregated image"
        );

        ResultRecord::success(path, output, sized.area_per_pixel, normalized_area)
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: BatchConfig) {
        self.config = config;
    }
}
