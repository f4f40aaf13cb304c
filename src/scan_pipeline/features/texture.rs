use crate::scan_pipeline::features::types::TextureStats;
use crate::scan_pipeline::raster::RasterBuffer;
use crate::scan_pipeline::raster::parallel::fold_rows;

/// Local luma variance below this is smooth.
pub const SMOOTH_VARIANCE: f64 = 100.0;
/// Local luma variance above this is rough.
pub const ROUGH_VARIANCE: f64 = 500.0;

/// Classifies each interior pixel by its 3x3 luma variance. Pixels between
/// the two thresholds count as neither.
pub fn analyze_texture(raster: &RasterBuffer) -> TextureStats {
    let interior = raster.interior_len();
    if interior == 0 {
        return TextureStats::default();
    }

    let (smooth, rough) = fold_rows(
        1..raster.height() - 1,
        raster.width(),
        || (0usize, 0usize),
        |(mut smooth, mut rough), y| {
            for x in 1..raster.width() - 1 {
                let variance = raster.local_luma_variance(x, y);
                if variance < SMOOTH_VARIANCE {
                    smooth += 1;
                } else if variance > ROUGH_VARIANCE {
                    rough += 1;
                }
            }
            (smooth, rough)
        },
        |a, b| (a.0 + b.0, a.1 + b.1),
    );

    TextureStats {
        smooth_area_ratio: smooth as f64 / interior as f64,
        rough_area_ratio: rough as f64 / interior as f64,
        texture_complexity: rough as f64 / (smooth as f64 + 1.0),
    }
}
