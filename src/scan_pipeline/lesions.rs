//! Lesion detection module
//!
//! Region-growing spot detector run over the preprocessed raster during
//! feature extraction.

mod types;
mod detector;


pub use types::{LesionAreaMode, LesionStats};
pub use detector::{
    LESION_BORDER, detect_lesions, find_candidates, is_lesion_candidate, is_spot_color,
    measure_spot_area,
};
