use crate::scan_pipeline::features::types::{ColorStats, ShapeStats, TextureStats};
use crate::scan_pipeline::lesions::LesionStats;

/// Starts at 100 and deducts for traits that make a leaf photo hard to read:
/// little healthy green, busy texture, heavy spotting, or almost no edges.
pub fn quality_score(
    color: &ColorStats,
    texture: &TextureStats,
    lesions: &LesionStats,
    shape: &ShapeStats,
) -> f64 {
    let mut score: f64 = 100.0;

    if color.healthy_green_ratio < 0.3 {
        score -= 20.0;
    }
    if texture.texture_complexity > 0.5 {
        score -= 15.0;
    }
    if lesions.spot_density > 0.1 {
        score -= 25.0;
    }
    if shape.edge_density < 0.01 {
        score -= 10.0;
    }

    score.max(0.0)
}
