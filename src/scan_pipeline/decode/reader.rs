use crate::scan_pipeline::common::error::Result;
use crate::scan_pipeline::decode::format::LeafImageFormat;
use crate::scan_pipeline::raster::RasterBuffer;

pub trait LeafImageReader {
    fn read_image(&self, data: &[u8], format: LeafImageFormat) -> Result<RasterBuffer>;
}
