//! Classification module
//!
//! Maps a feature vector to a diagnosis through a fixed, ordered decision table.

mod types;
mod rules;


pub use types::{ConfidenceLevel, Diagnosis, DiseaseLabel};
pub use rules::{DECISION_TABLE, DEFAULT_CONFIDENCE, DiagnosisRule, classify};
