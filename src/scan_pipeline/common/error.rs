use thiserror::Error;

/// Why a scan could not produce a result. Every variant is fatal for the scan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    #[error("pixel buffer length {actual} does not match {width}x{height} (expected {expected})")]
    DecodeFailure {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("image {0}x{1} is too small for 3x3 analysis")]
    EmptyImage(u32, u32),

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("input is {size} bytes, maximum is {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    #[error("failed to decode image: {0}")]
    Undecodable(String),

    #[error("image dimensions {0}x{1} exceed the configured maximum")]
    InvalidDimensions(u32, u32),
}

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Leaf scanning failed: {0}")]
    ScanFailed(#[from] FailureReason),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ScanError {
    /// The underlying reason when this is a scan failure.
    pub fn reason(&self) -> Option<&FailureReason> {
        match self {
            ScanError::ScanFailed(reason) => Some(reason),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
