use crate::scan_pipeline::features::types::ColorStats;
use crate::scan_pipeline::raster::parallel::fold_rows;
use crate::scan_pipeline::raster::{RasterBuffer, Rgba};

#[inline]
pub fn is_healthy_green(px: Rgba) -> bool {
    let [r, g, b, _] = px;
    g > 100 && g > r && g > b && (r as i32 - g as i32).abs() < 50
}

#[inline]
pub fn is_yellow_spot(px: Rgba) -> bool {
    let [r, g, b, _] = px;
    r > 150 && g > 150 && b < 100
}

#[inline]
pub fn is_brown_spot(px: Rgba) -> bool {
    let [r, g, b, _] = px;
    r > 100 && g > 50 && g < 150 && b < 50
}

#[derive(Default)]
struct ColorAccumulator {
    sum: [u64; 3],
    sum_sq: [u64; 3],
    healthy_green: u64,
    yellow_spots: u64,
    brown_spots: u64,
}

impl ColorAccumulator {
    fn add(&mut self, px: Rgba) {
        for c in 0..3 {
            let v = px[c] as u64;
            self.sum[c] += v;
            self.sum_sq[c] += v * v;
        }
        self.healthy_green += is_healthy_green(px) as u64;
        self.yellow_spots += is_yellow_spot(px) as u64;
        self.brown_spots += is_brown_spot(px) as u64;
    }

    fn merge(mut self, other: Self) -> Self {
        for c in 0..3 {
            self.sum[c] += other.sum[c];
            self.sum_sq[c] += other.sum_sq[c];
        }
        self.healthy_green += other.healthy_green;
        self.yellow_spots += other.yellow_spots;
        self.brown_spots += other.brown_spots;
        self
    }
}

/// One pass over every pixel: channel means, color-class ratios and
/// variances via `E[x²] - E[x]²`.
pub fn analyze_color(raster: &RasterBuffer) -> ColorStats {
    if raster.is_empty() {
        return ColorStats::default();
    }

    let acc = fold_rows(
        0..raster.height(),
        raster.width(),
        ColorAccumulator::default,
        |mut acc, y| {
            for x in 0..raster.width() {
                acc.add(raster.pixel(x, y));
            }
            acc
        },
        ColorAccumulator::merge,
    );

    let n = raster.len() as f64;
    let mean = acc.sum.map(|s| s as f64 / n);
    let variance = |c: usize| acc.sum_sq[c] as f64 / n - mean[c] * mean[c];

    ColorStats {
        avg_r: mean[0],
        avg_g: mean[1],
        avg_b: mean[2],
        healthy_green_ratio: acc.healthy_green as f64 / n,
        yellow_spot_ratio: acc.yellow_spots as f64 / n,
        brown_spot_ratio: acc.brown_spots as f64 / n,
        variance_r: variance(0),
        variance_g: variance(1),
        variance_b: variance(2),
    }
}
