use tracing::{debug, debug_span, instrument};

use crate::scan_pipeline::features::{
    analyze_color, analyze_shape, analyze_texture, count_edge_pixels, quality_score,
    types::FeatureVector,
};
use crate::scan_pipeline::lesions::{LesionAreaMode, detect_lesions};
use crate::scan_pipeline::raster::RasterBuffer;

/// Extracts the feature vector with the default lesion area accounting.
pub fn extract_features(raster: &RasterBuffer) -> FeatureVector {
    extract_features_with(raster, LesionAreaMode::default())
}

#[instrument(skip(raster), fields(width = raster.width(), height = raster.height()))]
pub fn extract_features_with(raster: &RasterBuffer, lesion_mode: LesionAreaMode) -> FeatureVector {
    let color_stats = {
        let _span = debug_span!("color_distribution").entered();
        analyze_color(raster)
    };

    let texture_stats = {
        let _span = debug_span!("texture").entered();
        analyze_texture(raster)
    };

    let shape_stats = {
        let _span = debug_span!("shape").entered();
        analyze_shape(raster, count_edge_pixels(raster))
    };

    let lesion_stats = {
        let _span = debug_span!("lesions").entered();
        detect_lesions(raster, lesion_mode)
    };

    let quality_score = quality_score(&color_stats, &texture_stats, &lesion_stats, &shape_stats);

    debug!(
        healthy_green = color_stats.healthy_green_ratio,
        edge_density = shape_stats.edge_density,
        spot_density = lesion_stats.spot_density,
        quality_score,
        "Features extracted"
    );

    FeatureVector {
        color_stats,
        texture_stats,
        shape_stats,
        lesion_stats,
        quality_score,
    }
}
