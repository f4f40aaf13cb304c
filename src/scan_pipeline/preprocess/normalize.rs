use tracing::debug;

use crate::scan_pipeline::raster::RasterBuffer;
use crate::scan_pipeline::raster::parallel::{fold_rows, map_pixels};

/// Channel mean the gray-world rescale aims for.
pub const TARGET_CHANNEL_MEAN: f64 = 128.0;

/// Mean of R, G and B over the whole raster.
pub fn channel_means(input: &RasterBuffer) -> [f64; 3] {
    if input.is_empty() {
        return [0.0; 3];
    }

    let sums = fold_rows(
        0..input.height(),
        input.width(),
        || [0u64; 3],
        |mut acc, y| {
            for x in 0..input.width() {
                let px = input.pixel(x, y);
                acc[0] += px[0] as u64;
                acc[1] += px[1] as u64;
                acc[2] += px[2] as u64;
            }
            acc
        },
        |a, b| [a[0] + b[0], a[1] + b[1], a[2] + b[2]],
    );

    let n = input.len() as f64;
    sums.map(|s| s as f64 / n)
}

/// Gray-world normalization: rescales each channel toward a mean of 128.
///
/// A channel whose mean is zero is left as is.
pub fn normalize_gray_world(input: &RasterBuffer) -> RasterBuffer {
    let means = channel_means(input);

    let mut scales = [None; 3];
    for (c, mean) in means.iter().enumerate() {
        if *mean > 0.0 {
            scales[c] = Some(TARGET_CHANNEL_MEAN / mean);
        } else {
            debug!(channel = c, "Zero channel mean, skipping gray-world rescale");
        }
    }

    let pixels = map_pixels(input.width(), input.height(), |x, y| {
        let mut px = input.pixel(x, y);
        for (c, scale) in scales.iter().enumerate() {
            if let Some(scale) = scale {
                px[c] = (px[c] as f64 * scale).round().min(255.0) as u8;
            }
        }
        px
    });

    RasterBuffer::from_parts_unchecked(input.width(), input.height(), pixels)
}
