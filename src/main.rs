use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use lumiwatt::energy_pipeline::{BatchConfig, EnergyBatchPipeline};
use lumiwatt::logger;

/// Estimate per-image energy proxies from a batch of raster images.
#[derive(Parser)]
#[command(name = "lumiwatt", version)]
struct Args {
    /// Paths of the images to process.
    #[arg(long = "images", num_args = 1.., required = true)]
    images: Vec<String>,

    /// Area in km² per image; `auto` derives it from the file name marker or
    /// the image geometry. Omit the flag to derive every area.
    #[arg(long = "areas-km2", num_args = 1..)]
    areas_km2: Vec<String>,

    /// Intensity a pixel must exceed to count as bright.
    #[arg(long, default_value_t = 200)]
    threshold: u8,

    /// Sum every pixel instead of only bright ones.
    #[arg(long)]
    unthresholded: bool,

    /// Assumed ground resolution in meters per pixel (x, then y).
    #[arg(long = "resolution-m", num_args = 2, default_values_t = [1.0, 1.0])]
    resolution_m: Vec<f64>,

    /// Write the JSON records here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn parse_area(raw: &str) -> anyhow::Result<Option<f64>> {
    if raw.eq_ignore_ascii_case("auto") {
        return Ok(None);
    }
    let value = raw
        .parse::<f64>()
        .with_context(|| format!("invalid area value: {raw}"))?;
    Ok(Some(value))
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let args = Args::parse();

    let areas: Vec<Option<f64>> = if args.areas_km2.is_empty() {
        vec![None; args.images.len()]
    } else {
        args.areas_km2
            .iter()
            .map(|raw| parse_area(raw))
            .collect::<anyhow::Result<_>>()?
    };

    let config = BatchConfig::builder()
        .threshold(if args.unthresholded {
            None
        } else {
            Some(args.threshold)
        })
        .x_resolution_m(args.resolution_m[0])
        .y_resolution_m(args.resolution_m[1])
        .build();

    let pipeline = EnergyBatchPipeline::new(config);
    info!("Energy batch pipeline initialized");

    let records = pipeline.run(&args.images, &areas);
    let json = serde_json::to_string_pretty(&records).context("serializing result records")?;

    match &args.out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing records to {}", path.display()))?
        }
        None => println!("{json}"),
    }

    Ok(())
}
