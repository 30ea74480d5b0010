use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("{channel} must be within {min}..={max}, got {value}")]
    OutOfRange {
        channel: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Image must be at least 1x1, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] png::EncodingError),
}

pub type Result<T> = std::result::Result<T, ColorError>;
