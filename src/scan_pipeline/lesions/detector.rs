use std::collections::{HashSet, VecDeque};

use rayon::prelude::*;
use tracing::debug;

use crate::scan_pipeline::lesions::types::{LesionAreaMode, LesionStats};
use crate::scan_pipeline::raster::parallel::fold_rows;
use crate::scan_pipeline::raster::{RasterBuffer, Rgba, WINDOW_OFFSETS};

/// Candidates are only searched this far from the image edge.
pub const LESION_BORDER: u32 = 2;

/// A neighbor differs when red or green moves by more than this.
const NEIGHBOR_DELTA: i32 = 30;
const MIN_DIFFERENT_NEIGHBORS: usize = 5;
/// Flood fills grow through pixels closer than this on every channel.
const FILL_TOLERANCE: i32 = 20;

/// Reddish (`r > 150, g < 120`) or yellowish (`r, g > 120, b < 80`) pixels.
#[inline]
pub fn is_spot_color(px: Rgba) -> bool {
    let [r, g, b, _] = px;
    (r > 150 && g < 120) || (r > 120 && g > 120 && b < 80)
}

/// A spot-colored pixel sitting on a local color discontinuity.
pub fn is_lesion_candidate(raster: &RasterBuffer, x: u32, y: u32) -> bool {
    let px = raster.pixel(x, y);
    if !is_spot_color(px) {
        return false;
    }

    let window = raster.window(x, y);
    let different = WINDOW_OFFSETS
        .iter()
        .zip(window.iter())
        .filter(|((dx, dy), n)| {
            (*dx, *dy) != (0, 0)
                && ((px[0] as i32 - n[0] as i32).abs() > NEIGHBOR_DELTA
                    || (px[1] as i32 - n[1] as i32).abs() > NEIGHBOR_DELTA)
        })
        .count();

    different >= MIN_DIFFERENT_NEIGHBORS
}

/// Row-major list of candidate positions, excluding a 2-pixel border.
pub fn find_candidates(raster: &RasterBuffer) -> Vec<(u32, u32)> {
    let xs = LESION_BORDER..raster.width().saturating_sub(LESION_BORDER);
    let ys = LESION_BORDER..raster.height().saturating_sub(LESION_BORDER);

    fold_rows(
        ys,
        raster.width(),
        Vec::new,
        |mut found, y| {
            found.extend(
                xs.clone()
                    .filter(|&x| is_lesion_candidate(raster, x, y))
                    .map(|x| (x, y)),
            );
            found
        },
        |mut a, b| {
            a.extend(b);
            a
        },
    )
}

#[inline]
fn similar(a: Rgba, b: Rgba) -> bool {
    (0..3).all(|c| (a[c] as i32 - b[c] as i32).abs() < FILL_TOLERANCE)
}

/// In-bounds 4-connected neighbors.
fn neighbors4(raster: &RasterBuffer, x: u32, y: u32) -> impl Iterator<Item = (u32, u32)> {
    let (w, h) = (raster.width(), raster.height());
    [
        (x.wrapping_add(1), y),
        (x.wrapping_sub(1), y),
        (x, y.wrapping_add(1)),
        (x, y.wrapping_sub(1)),
    ]
    .into_iter()
    .filter(move |&(nx, ny)| nx < w && ny < h)
}

/// 4-connected flood fill from `(x, y)` through pixels similar to the seed's
/// own color; returns the number of pixels reached.
pub fn measure_spot_area(raster: &RasterBuffer, x: u32, y: u32) -> usize {
    flood_fill(raster, x, y, |_| true)
}

/// Breadth-first fill. `claim` is asked before a similar pixel is counted and
/// may refuse it.
fn flood_fill(raster: &RasterBuffer, x: u32, y: u32, mut claim: impl FnMut(usize) -> bool) -> usize {
    let target = raster.pixel(x, y);
    let mut seen = HashSet::from([raster.index(x, y)]);
    let mut queue = VecDeque::from([(x, y)]);
    let mut area = 0;

    while let Some((cx, cy)) = queue.pop_front() {
        if !similar(target, raster.pixel(cx, cy)) || !claim(raster.index(cx, cy)) {
            continue;
        }
        area += 1;

        for (nx, ny) in neighbors4(raster, cx, cy) {
            if seen.insert(raster.index(nx, ny)) {
                queue.push_back((nx, ny));
            }
        }
    }

    area
}

/// Counts candidate spots and measures their flood-fill areas.
pub fn detect_lesions(raster: &RasterBuffer, mode: LesionAreaMode) -> LesionStats {
    let candidates = find_candidates(raster);

    let total_spot_area: usize = match mode {
        LesionAreaMode::PerCandidate => candidates
            .par_iter()
            .map(|&(x, y)| measure_spot_area(raster, x, y))
            .sum(),
        LesionAreaMode::Deduplicated => {
            let mut absorbed = vec![false; raster.len()];
            candidates
                .iter()
                .map(|&(x, y)| {
                    flood_fill(raster, x, y, |idx| !std::mem::replace(&mut absorbed[idx], true))
                })
                .sum()
        }
    };

    let spot_density = if raster.is_empty() {
        0.0
    } else {
        candidates.len() as f64 / raster.len() as f64
    };

    debug!(
        spot_count = candidates.len(),
        total_spot_area,
        ?mode,
        "Lesion detection complete"
    );

    LesionStats {
        spot_count: candidates.len(),
        total_spot_area,
        spot_density,
    }
}
