use std::io::Write;

use crate::scan_pipeline::common::error::Result;
use crate::scan_pipeline::raster::RasterBuffer;
use crate::scan_pipeline::scan::ScanConfig;

pub trait RasterWriter {
    fn write_raster(&self, raster: &RasterBuffer, output: &mut dyn Write, config: &ScanConfig) -> Result<()>;
}
