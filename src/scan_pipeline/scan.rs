//! Scan orchestration module
//!
//! Validates input, runs preprocessing, feature extraction and classification,
//! and wraps the outcome in a scan result. This is the only surface upload and
//! rendering collaborators talk to.

mod types;
mod orchestrator;
mod timing;


pub use types::{ScanConfig, ScanConfigBuilder, ScanResult};
pub use orchestrator::LeafScanner;
pub use timing::PipelineTimings;
