use crate::scan_pipeline::raster::RasterBuffer;
use crate::scan_pipeline::raster::parallel::map_pixels;

/// Per-channel 3x3 median filter. Border pixels are copied through.
pub fn median_denoise(input: &RasterBuffer) -> RasterBuffer {
    let pixels = map_pixels(input.width(), input.height(), |x, y| {
        if !input.is_interior(x, y) {
            return input.pixel(x, y);
        }

        let window = input.window(x, y);
        let mut out = window[4];
        for c in 0..3 {
            let mut values = window.map(|px| px[c]);
            values.sort_unstable();
            out[c] = values[4];
        }
        out
    });

    RasterBuffer::from_parts_unchecked(input.width(), input.height(), pixels)
}
