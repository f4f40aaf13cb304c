use crate::scan_pipeline::raster::types::{RasterBuffer, Rgba};

/// The 3x3 neighborhood, row-major from the top-left.
pub const WINDOW_OFFSETS: [(i32, i32); 9] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0), (0, 0), (1, 0),
    (-1, 1), (0, 1), (1, 1),
];

const SOBEL_X: [f64; 9] = [-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0];
const SOBEL_Y: [f64; 9] = [-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0];

/// Perceptual brightness, `0.299R + 0.587G + 0.114B`.
#[inline]
pub fn luma(px: Rgba) -> f64 {
    0.299 * px[0] as f64 + 0.587 * px[1] as f64 + 0.114 * px[2] as f64
}

/// Luma rounded to a histogram bin in 0..=255.
#[inline]
pub fn luma_bin(px: Rgba) -> usize {
    (luma(px).round() as usize).min(255)
}

impl RasterBuffer {
    /// The 3x3 window around an interior pixel.
    #[inline]
    pub fn window(&self, x: u32, y: u32) -> [Rgba; 9] {
        debug_assert!(self.is_interior(x, y));
        WINDOW_OFFSETS.map(|(dx, dy)| {
            self.pixel((x as i32 + dx) as u32, (y as i32 + dy) as u32)
        })
    }

    /// Sobel gradient magnitude of luma at an interior pixel.
    pub fn sobel_magnitude(&self, x: u32, y: u32) -> f64 {
        let window = self.window(x, y);
        let mut gx = 0.0;
        let mut gy = 0.0;
        for (k, px) in window.iter().enumerate() {
            let l = luma(*px);
            gx += l * SOBEL_X[k];
            gy += l * SOBEL_Y[k];
        }
        (gx * gx + gy * gy).sqrt()
    }

    /// Variance of luma over the 3x3 window, `E[l²] - E[l]²`.
    pub fn local_luma_variance(&self, x: u32, y: u32) -> f64 {
        let (sum, sum_sq) = self.window(x, y).iter().fold((0.0, 0.0), |(s, sq), px| {
            let l = luma(*px);
            (s + l, sq + l * l)
        });
        let mean = sum / 9.0;
        sum_sq / 9.0 - mean * mean
    }
}
