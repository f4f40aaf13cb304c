use serde::Serialize;

use crate::scan_pipeline::common::error::{FailureReason, Result};

/// Largest accepted upload, 10 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

const HIGH_QUALITY_MIN_SIDE: u32 = 500;
const GOOD_ASPECT_TOLERANCE: f64 = 0.5;

pub fn validate_input_size(size: usize, limit: usize) -> Result<()> {
    if size > limit {
        return Err(FailureReason::InputTooLarge { size, limit }.into());
    }
    Ok(())
}

/// Resolution and framing of an upload, judged before any analysis.
///
/// This is unrelated to the feature-derived quality score: it only looks at
/// the pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadQuality {
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: f64,
    pub resolution: u64,
    pub is_high_quality: bool,
    pub has_good_aspect: bool,
}

impl UploadQuality {
    pub fn assess(width: u32, height: u32) -> Self {
        let aspect_ratio = width as f64 / height.max(1) as f64;
        Self {
            width,
            height,
            aspect_ratio,
            resolution: width as u64 * height as u64,
            is_high_quality: width >= HIGH_QUALITY_MIN_SIDE && height >= HIGH_QUALITY_MIN_SIDE,
            has_good_aspect: (aspect_ratio - 1.0).abs() < GOOD_ASPECT_TOLERANCE,
        }
    }

    /// Uploads that are both large enough and close to square.
    pub fn is_ready(&self) -> bool {
        self.is_high_quality && self.has_good_aspect
    }
}
