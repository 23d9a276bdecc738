use std::path::Path;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use lumiwatt::energy_pipeline::{
    BatchConfig, EnergyBatchPipeline, GrayImageData, GrayImageReader, Result,
};

struct SyntheticReader {
    width: u32,
    height: u32,
}

impl GrayImageReader for SyntheticReader {
    fn read_gray(&self, _path: &Path) -> Result<GrayImageData> {
        let pixels = (0..self.width as usize * self.height as usize)
            .map(|i| (i % 256) as u8)
            .collect();
        Ok(GrayImageData {
            width: self.width,
            height: self.height,
            pixels,
        })
    }
}

fn benchmark_batch_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_by_image_size");

    let sizes = vec![(100, 100, "100x100"), (500, 500, "500x500"), (1000, 1000, "1000x1000")];

    for (width, height, label) in sizes {
        let paths: Vec<String> = (0..4).map(|i| format!("image_{i}.png")).collect();
        let areas: Vec<Option<f64>> = vec![Some(4.0), Some(2.0), Some(1.0), Some(0.5)];

        group.bench_with_input(BenchmarkId::from_parameter(label), &(width, height), |b, &(w, h)| {
            let reader = SyntheticReader {
                width: w,
                height: h,
            };
            let pipeline = EnergyBatchPipeline::with_custom(reader, BatchConfig::default());
            b.iter(|| black_box(pipeline.run(&paths, &areas)));
        });
    }

    group.finish();
}

fn benchmark_threshold_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("threshold_variants");

    let paths: Vec<String> = (0..8).map(|i| format!("image_{i}.png")).collect();
    let areas: Vec<Option<f64>> = (0..8).map(|i| Some((i + 1) as f64)).collect();

    for (label, threshold) in [("bright_only", Some(200)), ("whole_image", None)] {
        group.bench_function(label, |b| {
            let reader = SyntheticReader {
                width: 512,
                height: 512,
            };
            let config = BatchConfig::builder().threshold(threshold).build();
            let pipeline = EnergyBatchPipeline::with_custom(reader, config);
            b.iter(|| black_box(pipeline.run(&paths, &areas)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_batch_sizes, benchmark_threshold_variants);
criterion_main!(benches);
