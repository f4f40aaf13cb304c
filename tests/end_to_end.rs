use std::fs::File;
use std::path::{Path, PathBuf};

use leaf_scanner_rs::scan_pipeline::{
    DiseaseLabel, FailureReason, LeafScanner, LesionAreaMode, ScanConfig, ScanError, TiffCompression,
};
use tempfile::TempDir;
use tiff::decoder::{Decoder, DecodingResult};

fn write_png(dir: &TempDir, name: &str, img: &image::RgbaImage) -> PathBuf {
    let path = dir.path().join(name);
    img.save_with_format(&path, image::ImageFormat::Png).unwrap();
    path
}

fn green_leaf(width: u32, height: u32) -> image::RgbaImage {
    image::RgbaImage::from_pixel(width, height, image::Rgba([0, 180, 0, 255]))
}

fn read_tiff(path: &Path) -> ((u32, u32), Vec<u8>) {
    let mut decoder = Decoder::new(File::open(path).unwrap()).unwrap();
    let dims = decoder.dimensions().unwrap();
    match decoder.read_image().unwrap() {
        DecodingResult::U8(data) => (dims, data),
        _ => panic!("expected 8-bit samples"),
    }
}

#[test]
fn scans_uniform_green_leaf_as_healthy() {
    let dir = TempDir::new().unwrap();
    let input = write_png(&dir, "leaf.png", &green_leaf(100, 100));

    let result = LeafScanner::default().scan_file(&input, None).unwrap();

    assert_eq!(result.diagnosis.label, DiseaseLabel::Healthy);
    assert!(result.diagnosis.is_healthy);
    assert_eq!(result.features.lesion_stats.spot_count, 0);
    assert!((0.0..=100.0).contains(&result.quality_score));
    assert_eq!(result.upload_quality.resolution, 10_000);
    assert!(!result.upload_quality.is_high_quality);
    assert!(result.upload_quality.has_good_aspect);
}

#[test]
fn exports_preprocessed_raster_as_tiff() {
    let dir = TempDir::new().unwrap();
    let input = write_png(&dir, "leaf.png", &green_leaf(64, 48));
    let export = dir.path().join("leaf.tiff");

    for compression in [TiffCompression::None, TiffCompression::Lzw, TiffCompression::DeflateBalanced] {
        let scanner = LeafScanner::new(ScanConfig::builder().compression(compression).build());
        scanner.scan_file(&input, Some(&export)).unwrap();

        let ((width, height), data) = read_tiff(&export);
        assert_eq!((width, height), (64, 48));
        assert_eq!(data.len(), 64 * 48 * 4);
        // Gray-world scales the green channel to 128 and leaves empty channels alone.
        assert!(data.chunks_exact(4).all(|p| p == [0, 128, 0, 255]));
    }
}

#[test]
fn timings_include_decode_and_export() {
    let dir = TempDir::new().unwrap();
    let input = write_png(&dir, "leaf.png", &green_leaf(32, 32));
    let export = dir.path().join("out.tiff");

    let (_, timings) = LeafScanner::default()
        .scan_file_with_timings(&input, Some(&export))
        .unwrap();

    let names: Vec<_> = timings.steps().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        ["decode", "validate_dimensions", "preprocess", "extract_features", "classify", "export_tiff"]
    );
}

#[test]
fn spotted_leaf_produces_bounded_scores() {
    let dir = TempDir::new().unwrap();
    let mut img = green_leaf(80, 80);
    for y in 20..40 {
        for x in 20..40 {
            img.put_pixel(x, y, image::Rgba([170, 60, 30, 255]));
        }
    }
    let input = write_png(&dir, "spotted.png", &img);

    for mode in [LesionAreaMode::PerCandidate, LesionAreaMode::Deduplicated] {
        let scanner = LeafScanner::new(ScanConfig::builder().lesion_area_mode(mode).build());
        let result = scanner.scan_file(&input, None).unwrap();

        assert!((0.0..=100.0).contains(&result.diagnosis.confidence));
        assert!((0.0..=100.0).contains(&result.quality_score));
        assert_eq!(result.diagnosis.is_healthy, result.diagnosis.label == DiseaseLabel::Healthy);
    }
}

#[test]
fn rejects_single_row_image() {
    let dir = TempDir::new().unwrap();
    let input = write_png(&dir, "strip.png", &green_leaf(40, 1));

    let err = LeafScanner::default().scan_file(&input, None).unwrap_err();
    assert!(matches!(err.reason(), Some(FailureReason::EmptyImage(40, 1))));
}

#[test]
fn rejects_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("leaf.gif");
    std::fs::write(&input, b"GIF89a").unwrap();

    let err = LeafScanner::default().scan_file(&input, None).unwrap_err();
    assert!(matches!(err.reason(), Some(FailureReason::UnsupportedFormat(_))));
}

#[test]
fn rejects_corrupt_png() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.png");
    std::fs::write(&input, b"\x89PNG not really").unwrap();

    let err = LeafScanner::default().scan_file(&input, None).unwrap_err();
    assert!(matches!(err.reason(), Some(FailureReason::Undecodable(_))));
}

#[test]
fn missing_input_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let err = LeafScanner::default()
        .scan_file(dir.path().join("absent.png"), None)
        .unwrap_err();
    assert!(matches!(err, ScanError::InputReadError(_)));
}
