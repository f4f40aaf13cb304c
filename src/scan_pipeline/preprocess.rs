//! Preprocessing module
//!
//! Pixel-level filters run before feature extraction. Each stage reads one
//! raster snapshot and allocates a new one; `preprocess` chains them in the
//! required order.

mod contrast;
mod denoise;
mod normalize;
mod edges;
mod chain;


pub use contrast::{equalize_contrast, luma_histogram};
pub use denoise::median_denoise;
pub use normalize::{TARGET_CHANNEL_MEAN, channel_means, normalize_gray_world};
pub use edges::{EDGE_PRESERVE_THRESHOLD, merge_edges};
pub use chain::preprocess;
