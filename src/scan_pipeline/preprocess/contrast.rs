use tracing::debug;

use crate::scan_pipeline::raster::parallel::{fold_rows, map_pixels};
use crate::scan_pipeline::raster::{RasterBuffer, luma_bin};

/// 256-bin histogram of rounded luma.
pub fn luma_histogram(input: &RasterBuffer) -> [u64; 256] {
    fold_rows(
        0..input.height(),
        input.width(),
        || [0u64; 256],
        |mut hist, y| {
            for x in 0..input.width() {
                hist[luma_bin(input.pixel(x, y))] += 1;
            }
            hist
        },
        |mut a, b| {
            for (dst, src) in a.iter_mut().zip(b.iter()) {
                *dst += src;
            }
            a
        },
    )
}

/// Histogram equalization applied as a per-pixel brightness ratio.
///
/// Each pixel's luma is mapped through the normalized CDF and all three
/// channels are scaled by `equalized / max(luma, 1)`. A single-bin histogram
/// leaves the image unchanged.
pub fn equalize_contrast(input: &RasterBuffer) -> RasterBuffer {
    let histogram = luma_histogram(input);

    let mut cdf = [0u64; 256];
    let mut running = 0;
    for (bin, count) in histogram.iter().enumerate() {
        running += count;
        cdf[bin] = running;
    }

    let cdf_min = cdf.iter().copied().find(|&v| v > 0).unwrap_or(0);
    let total = cdf[255];
    let span = total - cdf_min;

    let ratios: [f64; 256] = if span == 0 {
        debug!("Single-bin luma histogram, contrast equalization is identity");
        [1.0; 256]
    } else {
        std::array::from_fn(|bin| {
            let equalized =
                (cdf[bin].saturating_sub(cdf_min) as f64 / span as f64 * 255.0).round();
            equalized / bin.max(1) as f64
        })
    };

    let pixels = map_pixels(input.width(), input.height(), |x, y| {
        let px = input.pixel(x, y);
        let ratio = ratios[luma_bin(px)];
        let scale = |c: u8| (c as f64 * ratio).round().clamp(0.0, 255.0) as u8;
        [scale(px[0]), scale(px[1]), scale(px[2]), px[3]]
    });

    RasterBuffer::from_parts_unchecked(input.width(), input.height(), pixels)
}
