use std::io::Write;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::scan_pipeline::{
    classify::classify,
    common::error::{FailureReason, Result, ScanError},
    decode::{LeafImageFormat, LeafImageReader, StandardImageReader, UploadQuality, validate_input_size},
    features::extract_features_with,
    preprocess::preprocess,
    raster::RasterBuffer,
    scan::{PipelineTimings, ScanConfig, ScanResult},
    tiff::{RasterWriter, StandardTiffWriter},
};

/// Runs the full scan for one image per call. Holds no per-scan state, so a
/// single scanner can serve any number of scans, including concurrently.
pub struct LeafScanner<R: LeafImageReader, W: RasterWriter> {
    reader: R,
    writer: W,
    config: ScanConfig,
}

impl LeafScanner<StandardImageReader, StandardTiffWriter> {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            reader: StandardImageReader,
            writer: StandardTiffWriter,
            config,
        }
    }
}

impl Default for LeafScanner<StandardImageReader, StandardTiffWriter> {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

impl<R: LeafImageReader, W: RasterWriter> LeafScanner<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ScanConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if width <= 1 || height <= 1 {
            return Err(FailureReason::EmptyImage(width, height).into());
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(FailureReason::InvalidDimensions(width, height).into());
            }
        }

        Ok(())
    }

    /// Preprocess, extract and classify. Returns the preprocessed raster too so
    /// callers can export it.
    fn run_stages(
        &self,
        raster: RasterBuffer,
        timings: &mut PipelineTimings,
    ) -> Result<(ScanResult, RasterBuffer)> {
        let (width, height) = (raster.width(), raster.height());
        timings.time("validate_dimensions", || self.validate_dimensions(width, height))?;

        let upload_quality = UploadQuality::assess(width, height);
        if !upload_quality.is_high_quality {
            warn!(width, height, "Low resolution upload may affect accuracy");
        }

        let filtered = timings.time("preprocess", || preprocess(&raster));
        drop(raster);

        let mode = self.config.lesion_area_mode;
        let features = timings.time("extract_features", || extract_features_with(&filtered, mode));
        let diagnosis = timings.time("classify", || classify(&features));

        let result = ScanResult::new(diagnosis, features, upload_quality);
        info!(
            scan_id = %result.scan_id,
            label = %result.diagnosis.label,
            confidence = result.diagnosis.confidence,
            quality_score = result.quality_score,
            "Scan complete in {:.3}ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );

        Ok((result, filtered))
    }

    /// Scans an already decoded raster.
    #[instrument(skip(self, raster), fields(width = raster.width(), height = raster.height()))]
    pub fn scan_raster(&self, raster: RasterBuffer) -> Result<ScanResult> {
        self.scan_raster_with_timings(raster).map(|(result, _)| result)
    }

    pub fn scan_raster_with_timings(&self, raster: RasterBuffer) -> Result<(ScanResult, PipelineTimings)> {
        let mut timings = PipelineTimings::new();
        let (result, _) = self.run_stages(raster, &mut timings)?;
        Ok((result, timings))
    }

    /// Scans interleaved RGBA bytes with their declared dimensions.
    pub fn scan_rgba(&self, width: u32, height: u32, bytes: &[u8]) -> Result<ScanResult> {
        let raster = RasterBuffer::from_rgba_bytes(width, height, bytes)?;
        self.scan_raster(raster)
    }

    /// Validates and decodes an encoded upload.
    #[instrument(skip(self, data, format), fields(input_size = data.len(), format = %format))]
    pub fn decode(&self, data: &[u8], format: LeafImageFormat) -> Result<RasterBuffer> {
        if self.config.validate_input {
            let _span = tracing::info_span!("validate_input").entered();
            validate_input_size(data.len(), self.config.max_input_bytes)?;
        }

        let _span = tracing::info_span!("decode_image").entered();
        self.reader.read_image(data, format)
    }

    pub fn scan_encoded(&self, data: &[u8], format: LeafImageFormat) -> Result<ScanResult> {
        self.scan_encoded_timed(data, format, None).map(|(result, _)| result)
    }

    /// Scans an encoded upload and writes the preprocessed raster to `output`.
    pub fn scan_encoded_with_export(
        &self,
        data: &[u8],
        format: LeafImageFormat,
        output: &mut dyn Write,
    ) -> Result<ScanResult> {
        self.scan_encoded_timed(data, format, Some(output)).map(|(result, _)| result)
    }

    fn scan_encoded_timed(
        &self,
        data: &[u8],
        format: LeafImageFormat,
        output: Option<&mut dyn Write>,
    ) -> Result<(ScanResult, PipelineTimings)> {
        let mut timings = PipelineTimings::new();

        let raster = timings.time("decode", || self.decode(data, format))?;

        let (result, filtered) = self.run_stages(raster, &mut timings)?;

        if let Some(output) = output {
            timings.time("export_tiff", || self.writer.write_raster(&filtered, output, &self.config))?;
        }

        Ok((result, timings))
    }

    pub fn scan_file<P: AsRef<Path>>(&self, input_path: P, export_path: Option<&Path>) -> Result<ScanResult> {
        self.scan_file_with_timings(input_path, export_path).map(|(result, _)| result)
    }

    /// Reads, decodes and scans a file, optionally exporting the preprocessed
    /// raster as TIFF. Timings include the decode and export steps.
    #[instrument(skip(self, input_path, export_path))]
    pub fn scan_file_with_timings<P: AsRef<Path>>(
        &self,
        input_path: P,
        export_path: Option<&Path>,
    ) -> Result<(ScanResult, PipelineTimings)> {
        let input_path = input_path.as_ref();
        let format = LeafImageFormat::from_path(input_path)?;

        info!(input = %input_path.display(), format = %format, "Scanning file");

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ScanError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        match export_path {
            Some(export_path) => {
                let mut output_file = {
                    let _span = tracing::info_span!("create_output_file").entered();
                    std::fs::File::create(export_path).map_err(|e| {
                        ScanError::OutputWriteError(format!("{}: {}", export_path.display(), e))
                    })?
                };
                let output: &mut dyn Write = &mut output_file;
                self.scan_encoded_timed(&input_data, format, Some(output))
            }
            None => self.scan_encoded_timed(&input_data, format, None),
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ScanConfig) {
        self.config = config;
    }
}
