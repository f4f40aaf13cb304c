//! Scan configuration and result types

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::scan_pipeline::classify::Diagnosis;
use crate::scan_pipeline::decode::{DEFAULT_MAX_INPUT_BYTES, UploadQuality};
use crate::scan_pipeline::features::FeatureVector;
use crate::scan_pipeline::lesions::LesionAreaMode;
use crate::scan_pipeline::tiff::TiffCompression;

/// Configuration for a leaf scanner
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Largest encoded input accepted, in bytes
    pub max_input_bytes: usize,
    /// Whether to enforce `max_input_bytes` on encoded input before decoding.
    /// The format is always the caller's choice, so size is the only check.
    pub validate_input: bool,
    /// Optional limit on either side of the image
    pub max_dimension: Option<u32>,
    /// How overlapping lesion fills contribute to total spot area
    pub lesion_area_mode: LesionAreaMode,
    /// Compression for the preprocessed-raster export
    pub compression: TiffCompression,
    /// Predictor value for export compression (2 for horizontal differencing)
    pub predictor: Option<u16>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            validate_input: true,
            max_dimension: Some(50_000),
            lesion_area_mode: LesionAreaMode::PerCandidate,
            compression: TiffCompression::Lzw,
            predictor: Some(2),
        }
    }
}

impl ScanConfig {
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }
}

/// Builder for ScanConfig
#[derive(Default)]
pub struct ScanConfigBuilder {
    max_input_bytes: Option<usize>,
    validate_input: Option<bool>,
    max_dimension: Option<Option<u32>>,
    lesion_area_mode: Option<LesionAreaMode>,
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
}

impl ScanConfigBuilder {
    pub fn max_input_bytes(mut self, bytes: usize) -> Self {
        self.max_input_bytes = Some(bytes);
        self
    }

    pub fn validate_input(mut self, validate: bool) -> Self {
        self.validate_input = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn lesion_area_mode(mut self, mode: LesionAreaMode) -> Self {
        self.lesion_area_mode = Some(mode);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn build(self) -> ScanConfig {
        let default = ScanConfig::default();
        ScanConfig {
            max_input_bytes: self.max_input_bytes.unwrap_or(default.max_input_bytes),
            validate_input: self.validate_input.unwrap_or(default.validate_input),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            lesion_area_mode: self.lesion_area_mode.unwrap_or(default.lesion_area_mode),
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
        }
    }
}

/// Outcome of one successful scan. Owned by the caller once returned.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub diagnosis: Diagnosis,
    pub features: FeatureVector,
    pub quality_score: f64,
    /// Dimension heuristic for the scanned raster; never fails a scan.
    pub upload_quality: UploadQuality,
    pub scan_id: String,
    pub timestamp_utc: DateTime<Utc>,
}

impl ScanResult {
    pub(crate) fn new(diagnosis: Diagnosis, features: FeatureVector, upload_quality: UploadQuality) -> Self {
        Self {
            diagnosis,
            quality_score: features.quality_score,
            features,
            upload_quality,
            scan_id: format!("scan_{}", Uuid::new_v4().simple()),
            timestamp_utc: Utc::now(),
        }
    }
}
