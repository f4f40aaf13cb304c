use tracing::debug;

use crate::scan_pipeline::classify::types::{Diagnosis, DiseaseLabel};
use crate::scan_pipeline::features::FeatureVector;

/// One row of the decision table.
pub struct DiagnosisRule {
    pub label: DiseaseLabel,
    pub matches: fn(&FeatureVector) -> bool,
    pub confidence: fn(&FeatureVector) -> f64,
}

/// Confidence reported when no rule matches and the leaf is assumed healthy.
pub const DEFAULT_CONFIDENCE: f64 = 70.0;

fn density(f: &FeatureVector) -> f64 {
    f.lesion_stats.spot_density
}

/// Evaluated top to bottom; the first match wins.
pub static DECISION_TABLE: [DiagnosisRule; 5] = [
    DiagnosisRule {
        label: DiseaseLabel::Healthy,
        matches: |f| f.color_stats.healthy_green_ratio > 0.7 && density(f) < 0.01,
        confidence: |_| 85.0,
    },
    DiagnosisRule {
        label: DiseaseLabel::EarlyBlight,
        matches: |f| density(f) > 0.05 && f.color_stats.yellow_spot_ratio > 0.03,
        confidence: |f| (60.0 + density(f) * 500.0).min(90.0),
    },
    DiagnosisRule {
        label: DiseaseLabel::LateBlight,
        matches: |f| density(f) > 0.08 && f.color_stats.brown_spot_ratio > 0.05,
        confidence: |f| (55.0 + density(f) * 400.0).min(85.0),
    },
    DiagnosisRule {
        label: DiseaseLabel::Rust,
        matches: |f| density(f) > 0.03 && f.color_stats.brown_spot_ratio > 0.02,
        confidence: |f| (50.0 + density(f) * 300.0).min(80.0),
    },
    DiagnosisRule {
        label: DiseaseLabel::UnknownDisease,
        matches: |f| density(f) > 0.02,
        confidence: |f| (40.0 + density(f) * 200.0).min(75.0),
    },
];

pub fn classify(features: &FeatureVector) -> Diagnosis {
    let diagnosis = DECISION_TABLE
        .iter()
        .find(|rule| (rule.matches)(features))
        .map(|rule| Diagnosis::new(rule.label, (rule.confidence)(features)))
        .unwrap_or_else(|| Diagnosis::new(DiseaseLabel::Healthy, DEFAULT_CONFIDENCE));

    debug!(
        label = %diagnosis.label,
        confidence = diagnosis.confidence,
        "Classification complete"
    );
    diagnosis
}
