use crate::scan_pipeline::raster::RasterBuffer;
use crate::scan_pipeline::raster::parallel::map_pixels;

/// Sobel magnitude above which the unfiltered pixel is restored.
pub const EDGE_PRESERVE_THRESHOLD: f64 = 50.0;

/// Restores pixels on strong edges of `original` into `filtered`.
///
/// Gradients are measured on `original` (the pre-denoise snapshot). Both
/// rasters must share dimensions.
pub fn merge_edges(filtered: &RasterBuffer, original: &RasterBuffer) -> RasterBuffer {
    debug_assert_eq!(
        (filtered.width(), filtered.height()),
        (original.width(), original.height())
    );

    let pixels = map_pixels(filtered.width(), filtered.height(), |x, y| {
        if original.is_interior(x, y) && original.sobel_magnitude(x, y) > EDGE_PRESERVE_THRESHOLD {
            original.pixel(x, y)
        } else {
            filtered.pixel(x, y)
        }
    });

    RasterBuffer::from_parts_unchecked(filtered.width(), filtered.height(), pixels)
}
