//! Image decoding module
//!
//! Turns encoded leaf photographs (JPEG, PNG, WebP) into raster buffers and
//! validates uploads before they reach the pipeline.

mod format;
mod reader;
mod standard_reader;
mod upload;

#[cfg(test)]
mod tests;

pub use format::LeafImageFormat;
pub use reader::LeafImageReader;
pub use standard_reader::StandardImageReader;
pub use upload::{DEFAULT_MAX_INPUT_BYTES, UploadQuality, validate_input_size};
