//! Leaf scan pipeline module
//!
//! This module turns a decoded leaf photograph into a disease diagnosis, with
//! separate modules for raster handling, input decoding, preprocessing filters,
//! feature extraction, lesion detection, classification and scan orchestration.

pub mod common;
pub mod raster;
pub mod decode;
pub mod preprocess;
pub mod lesions;
pub mod features;
pub mod classify;
pub mod tiff;
pub mod scan;

pub use common::{
    FailureReason,
    ScanError,
    Result,
};

pub use raster::{
    Rgba,
    RasterBuffer,
};

pub use decode::{
    LeafImageFormat,
    LeafImageReader,
    StandardImageReader,
    UploadQuality,
};

pub use preprocess::preprocess;

pub use lesions::{
    LesionAreaMode,
    LesionStats,
    detect_lesions,
};

pub use features::{
    ColorStats,
    FeatureVector,
    ShapeStats,
    TextureStats,
    extract_features,
    extract_features_with,
};

pub use classify::{
    ConfidenceLevel,
    Diagnosis,
    DiseaseLabel,
    classify,
};

pub use self::tiff::{
    RasterWriter,
    StandardTiffWriter,
    TiffCompression,
};

pub use scan::{
    LeafScanner,
    PipelineTimings,
    ScanConfig,
    ScanConfigBuilder,
    ScanResult,
};
