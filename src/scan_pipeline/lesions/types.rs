//! Lesion detection types

use serde::{Deserialize, Serialize};

/// How overlapping flood fills contribute to the total spot area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LesionAreaMode {
    /// Every candidate runs its own fill. A lesion touched by several
    /// candidates is counted once per candidate.
    #[default]
    PerCandidate,
    /// Fills share one visited set, so each pixel is counted at most once.
    /// Candidates whose seed was already absorbed add no area.
    Deduplicated,
}

/// Aggregate spot statistics for one raster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LesionStats {
    /// Number of qualifying candidate pixels.
    pub spot_count: usize,
    /// Sum of flood-fill areas over all candidates.
    pub total_spot_area: usize,
    /// `spot_count / (width * height)`.
    pub spot_density: f64,
}
