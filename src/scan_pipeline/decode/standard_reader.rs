//! Image reader implementation using the image library.
//!
//! Decodes JPEG, PNG and WebP bytes into an RGBA8 raster. Format parsing stays
//! here so the pipeline itself only ever sees decoded pixels.

use tracing::debug;

use crate::scan_pipeline::common::error::{FailureReason, Result};
use crate::scan_pipeline::decode::format::LeafImageFormat;
use crate::scan_pipeline::decode::reader::LeafImageReader;
use crate::scan_pipeline::raster::RasterBuffer;

/// Reader backed by the `image` crate.
pub struct StandardImageReader;

impl LeafImageReader for StandardImageReader {
    /// Decodes `data` as `format` and converts it to RGBA8.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use leaf_scanner_rs::scan_pipeline::{LeafImageFormat, LeafImageReader, StandardImageReader};
    ///
    /// let bytes = std::fs::read("leaf.png").unwrap();
    /// let raster = StandardImageReader.read_image(&bytes, LeafImageFormat::Png).unwrap();
    /// ```
    fn read_image(&self, data: &[u8], format: LeafImageFormat) -> Result<RasterBuffer> {
        debug!("Decoding {} image, {} bytes", format, data.len());

        let decoded = image::load_from_memory_with_format(data, format.to_image_format())
            .map_err(|e| FailureReason::Undecodable(e.to_string()))?;

        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();

        debug!("Decoded image: {}x{}", width, height);

        RasterBuffer::from_rgba_bytes(width, height, rgba.as_raw())
    }
}
