use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use leaf_scanner_rs::scan_pipeline::{
    LeafScanner, LesionAreaMode, RasterBuffer, ScanConfig, TiffCompression, extract_features_with, preprocess,
};
use std::io::Cursor;

/// Green leaf with a scatter of brown, halo-ringed spots.
fn generate_mock_leaf(width: u32, height: u32) -> RasterBuffer {
    let mut bytes = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            let in_spot = (x / 8 + y / 8) % 7 == 0;
            let on_ring = in_spot && (x % 8 == 0 || y % 8 == 0);
            let pixel = if on_ring {
                [140, 50, 50, 255]
            } else if in_spot {
                [160, 60, 40, 255]
            } else {
                [20, 150 + ((x + y) % 40) as u8, 30, 255]
            };
            bytes.extend_from_slice(&pixel);
        }
    }
    RasterBuffer::from_rgba_bytes(width, height, &bytes).unwrap()
}

fn benchmark_scan_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let leaf = generate_mock_leaf(width, height);
        let scanner = LeafScanner::new(ScanConfig::default());

        group.bench_with_input(BenchmarkId::from_parameter(label), &leaf, |b, leaf| {
            b.iter(|| {
                let _ = scanner.scan_raster(black_box(leaf.clone()));
            });
        });
    }

    group.finish();
}

fn benchmark_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let leaf = generate_mock_leaf(500, 500);
    let filtered = preprocess(&leaf);

    group.bench_function("preprocess", |b| {
        b.iter(|| preprocess(black_box(&leaf)));
    });

    for (mode, label) in [
        (LesionAreaMode::PerCandidate, "features_per_candidate"),
        (LesionAreaMode::Deduplicated, "features_deduplicated"),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| extract_features_with(black_box(&filtered), mode));
        });
    }

    group.finish();
}

fn benchmark_export_compression(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_compression");
    let mut png = Vec::new();
    image::RgbaImage::from_raw(300, 300, generate_mock_leaf(300, 300).into_rgba_bytes())
        .unwrap()
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .unwrap();

    let compressions = vec![
        (TiffCompression::None, "none"),
        (TiffCompression::Lzw, "lzw"),
        (TiffCompression::DeflateFast, "deflate_fast"),
    ];

    for (compression, label) in compressions {
        group.bench_with_input(BenchmarkId::from_parameter(label), &png, |b, data| {
            let config = ScanConfig::builder().compression(compression).build();
            let scanner = LeafScanner::new(config);

            b.iter(|| {
                let mut output = Cursor::new(Vec::new());
                let _ = scanner.scan_encoded_with_export(
                    black_box(data),
                    leaf_scanner_rs::scan_pipeline::LeafImageFormat::Png,
                    &mut output,
                );
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_scan_sizes,
    benchmark_stages,
    benchmark_export_compression
);
criterion_main!(benches);
