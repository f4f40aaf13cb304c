//! Raster export module
//!
//! Writes preprocessed rasters out as TIFF so the filtered image the
//! classifier actually saw can be inspected.

mod writer;
mod standard_tiff_writer;
pub mod types;

#[cfg(test)]
mod tests;

pub use writer::RasterWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::TiffCompression;
