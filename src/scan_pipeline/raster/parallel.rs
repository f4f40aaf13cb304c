//! Row-partitioned helpers so per-pixel scans can run on rayon for large rasters.

use std::ops::Range;

use rayon::prelude::*;

use crate::scan_pipeline::raster::types::Rgba;

/// Below this many pixels the sequential path is used.
pub(crate) const PARALLEL_THRESHOLD: usize = 128 * 128;

/// Allocates a new pixel vector by evaluating `f(x, y)` for every position.
pub(crate) fn map_pixels<F>(width: u32, height: u32, f: F) -> Vec<Rgba>
where
    F: Fn(u32, u32) -> Rgba + Sync,
{
    let w = width as usize;
    let mut out = vec![[0u8; 4]; w * height as usize];
    if w == 0 {
        return out;
    }

    let fill_row = |(y, row): (usize, &mut [Rgba])| {
        for (x, px) in row.iter_mut().enumerate() {
            *px = f(x as u32, y as u32);
        }
    };

    if out.len() >= PARALLEL_THRESHOLD {
        out.par_chunks_mut(w).enumerate().for_each(fill_row);
    } else {
        out.chunks_mut(w).enumerate().for_each(fill_row);
    }
    out
}

/// Folds over a range of rows, reducing per-thread accumulators.
pub(crate) fn fold_rows<A, I, F, R>(rows: Range<u32>, row_len: u32, init: I, fold_row: F, reduce: R) -> A
where
    A: Send,
    I: Fn() -> A + Sync + Send,
    F: Fn(A, u32) -> A + Sync + Send,
    R: Fn(A, A) -> A + Sync + Send,
{
    if rows.start >= rows.end {
        return init();
    }

    let pixels = (rows.end - rows.start) as usize * row_len as usize;
    if pixels >= PARALLEL_THRESHOLD {
        rows.into_par_iter().fold(&init, &fold_row).reduce(&init, &reduce)
    } else {
        rows.fold(init(), fold_row)
    }
}
