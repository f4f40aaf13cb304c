//! Feature vector types

use serde::Serialize;

use crate::scan_pipeline::lesions::LesionStats;

/// Channel averages, color-class ratios and channel variances.
///
/// Ratios are fractions of the total pixel count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorStats {
    pub avg_r: f64,
    pub avg_g: f64,
    pub avg_b: f64,
    pub healthy_green_ratio: f64,
    pub yellow_spot_ratio: f64,
    pub brown_spot_ratio: f64,
    pub variance_r: f64,
    pub variance_g: f64,
    pub variance_b: f64,
}

/// Local-variance texture classes, as fractions of the interior pixel count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureStats {
    pub smooth_area_ratio: f64,
    pub rough_area_ratio: f64,
    /// `rough / (smooth + 1)`.
    pub texture_complexity: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeStats {
    pub edge_density: f64,
    pub aspect_ratio: f64,
    /// `4π·area / perimeter²`, with the edge-pixel count standing in for the perimeter.
    pub compactness: f64,
}

/// Everything the classifier needs to know about one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    pub color_stats: ColorStats,
    pub texture_stats: TextureStats,
    pub shape_stats: ShapeStats,
    pub lesion_stats: LesionStats,
    /// Analyzability of the image, 0..=100.
    pub quality_score: f64,
}
