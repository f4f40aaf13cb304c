//! Feature extraction module
//!
//! Reduces a preprocessed raster to the numeric descriptors the classifier
//! reads: color distribution, texture, shape, lesion statistics and an
//! analyzability score.

mod types;
mod color;
mod texture;
mod shape;
mod quality;
mod extractor;


pub use types::{ColorStats, FeatureVector, ShapeStats, TextureStats};
pub use color::{analyze_color, is_brown_spot, is_healthy_green, is_yellow_spot};
pub use texture::{ROUGH_VARIANCE, SMOOTH_VARIANCE, analyze_texture};
pub use shape::{EDGE_THRESHOLD, analyze_shape, count_edge_pixels};
pub use quality::quality_score;
pub use extractor::{extract_features, extract_features_with};
