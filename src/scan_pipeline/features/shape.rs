use std::f64::consts::PI;

use crate::scan_pipeline::features::types::ShapeStats;
use crate::scan_pipeline::raster::RasterBuffer;
use crate::scan_pipeline::raster::parallel::fold_rows;

/// Sobel magnitude above which an interior pixel is an edge pixel.
pub const EDGE_THRESHOLD: f64 = 30.0;

pub fn count_edge_pixels(raster: &RasterBuffer) -> usize {
    if raster.interior_len() == 0 {
        return 0;
    }

    fold_rows(
        1..raster.height() - 1,
        raster.width(),
        || 0usize,
        |count, y| {
            count
                + (1..raster.width() - 1)
                    .filter(|&x| raster.sobel_magnitude(x, y) > EDGE_THRESHOLD)
                    .count()
        },
        |a, b| a + b,
    )
}

/// Edge density, aspect ratio and compactness.
///
/// The edge-pixel count doubles as the perimeter estimate. With no edge
/// pixels compactness is reported as 0.
pub fn analyze_shape(raster: &RasterBuffer, edge_pixels: usize) -> ShapeStats {
    let interior = raster.interior_len();
    let area = raster.len() as f64;

    let edge_density = if interior == 0 {
        0.0
    } else {
        edge_pixels as f64 / interior as f64
    };

    let compactness = if edge_pixels == 0 {
        0.0
    } else {
        4.0 * PI * area / (edge_pixels as f64).powi(2)
    };

    ShapeStats {
        edge_density,
        aspect_ratio: raster.width() as f64 / raster.height().max(1) as f64,
        compactness,
    }
}
