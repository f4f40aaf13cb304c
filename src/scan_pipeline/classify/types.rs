//! Diagnosis types

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiseaseLabel {
    Healthy,
    #[serde(rename = "Early_Blight")]
    EarlyBlight,
    #[serde(rename = "Late_Blight")]
    LateBlight,
    Rust,
    #[serde(rename = "Unknown_Disease")]
    UnknownDisease,
}

impl DiseaseLabel {
    /// Key used by recommendation lookups and result renderers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::EarlyBlight => "Early_Blight",
            Self::LateBlight => "Late_Blight",
            Self::Rust => "Rust",
            Self::UnknownDisease => "Unknown_Disease",
        }
    }

    /// Label with underscores shown as spaces.
    pub fn display_name(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for DiseaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse band for a diagnosis confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// Below 60.
    Low,
    Moderate,
    /// Above 85.
    High,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence < 60.0 {
            Self::Low
        } else if confidence > 85.0 {
            Self::High
        } else {
            Self::Moderate
        }
    }
}

/// The classifier's verdict for one scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    pub label: DiseaseLabel,
    /// Heuristic confidence, 0..=100.
    pub confidence: f64,
    pub is_healthy: bool,
}

impl Diagnosis {
    pub fn new(label: DiseaseLabel, confidence: f64) -> Self {
        Self {
            label,
            confidence,
            is_healthy: label == DiseaseLabel::Healthy,
        }
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_confidence(self.confidence)
    }
}
