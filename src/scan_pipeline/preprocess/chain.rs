use tracing::{debug_span, instrument};

use crate::scan_pipeline::preprocess::{
    equalize_contrast, median_denoise, merge_edges, normalize_gray_world,
};
use crate::scan_pipeline::raster::RasterBuffer;

/// Runs contrast equalization, denoising, color normalization and the
/// edge-preserving merge, in that order.
///
/// The equalized snapshot is kept alive until the merge, which restores its
/// pixels wherever it has strong edges.
#[instrument(skip(input), fields(width = input.width(), height = input.height()))]
pub fn preprocess(input: &RasterBuffer) -> RasterBuffer {
    let equalized = {
        let _span = debug_span!("equalize_contrast").entered();
        equalize_contrast(input)
    };

    let normalized = {
        let denoised = {
            let _span = debug_span!("median_denoise").entered();
            median_denoise(&equalized)
        };
        let _span = debug_span!("normalize_gray_world").entered();
        normalize_gray_world(&denoised)
    };

    let _span = debug_span!("merge_edges").entered();
    merge_edges(&normalized, &equalized)
}
