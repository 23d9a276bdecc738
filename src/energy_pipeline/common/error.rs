use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Input file not found or unreadable: {0}")]
    MissingFile(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Negative area supplied: {0} km2")]
    InvalidArea(f64),

    #[error("No area could be resolved for: {0}")]
    UnresolvedArea(String),

    #[error("Degenerate image dimensions: width={0}, height={1}")]
    DegenerateImage(u32, u32),

    #[error("Batch contains no images")]
    EmptyBatch,

    #[error("Batch size mismatch: {paths} paths, {areas} areas")]
    BatchSizeMismatch { paths: usize, areas: usize },

    #[error("Aggregation failed: {0}")]
    Aggregation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
