use std::io::Write;

use tiff::encoder::compression::DeflateLevel;
use tiff::encoder::{Compression, TiffEncoder, colortype};
use tiff::tags::Predictor;
use tracing::debug;

use crate::scan_pipeline::common::error::{Result, ScanError};
use crate::scan_pipeline::raster::RasterBuffer;
use crate::scan_pipeline::scan::ScanConfig;
use crate::scan_pipeline::tiff::types::TiffCompression;
use crate::scan_pipeline::tiff::writer::RasterWriter;

/// Encodes rasters as 8-bit RGBA TIFF.
pub struct StandardTiffWriter;

impl RasterWriter for StandardTiffWriter {
    fn write_raster(&self, raster: &RasterBuffer, output: &mut dyn Write, config: &ScanConfig) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}", raster.width(), raster.height());

        let mut buffer = Vec::new();

        let compression = match config.compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
            TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
        };

        let mut encoder = TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| ScanError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                2 => Predictor::Horizontal,
                _ => Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        let bytes: Vec<u8> = raster.pixels().iter().flatten().copied().collect();
        encoder
            .write_image::<colortype::RGBA8>(raster.width(), raster.height(), &bytes)
            .map_err(|e| ScanError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
