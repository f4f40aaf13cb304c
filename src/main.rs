use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use leaf_scanner_rs::logger;
use leaf_scanner_rs::scan_pipeline::{
    LeafScanner, LesionAreaMode, ScanConfig, ScanResult, TiffCompression,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "leaf-scan")]
#[command(version, about = "Rule-based leaf disease scanner", long_about = None)]
struct Cli {
    /// Leaf photograph (JPEG, PNG or WebP)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Write the preprocessed image to this TIFF file
    #[arg(short, long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// TIFF compression for --export
    #[arg(long, value_enum, default_value_t = TiffCompression::Lzw)]
    compression: TiffCompression,

    /// Reject inputs larger than this many megabytes
    #[arg(long, value_name = "MB", default_value_t = 10)]
    max_size_mb: usize,

    /// Reject images wider or taller than this many pixels
    #[arg(long, value_name = "PIXELS")]
    max_dimension: Option<u32>,

    /// Count each lesion pixel once even when several spots reach it
    #[arg(long)]
    dedupe_lesions: bool,

    /// Print the scan result as JSON
    #[arg(long)]
    json: bool,

    /// Print per-stage timings
    #[arg(long)]
    timings: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init(match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    });

    let mut builder = ScanConfig::builder()
        .compression(cli.compression)
        .max_input_bytes(cli.max_size_mb * 1024 * 1024)
        .lesion_area_mode(if cli.dedupe_lesions {
            LesionAreaMode::Deduplicated
        } else {
            LesionAreaMode::PerCandidate
        });
    if cli.max_dimension.is_some() {
        builder = builder.max_dimension(cli.max_dimension);
    }
    let scanner = LeafScanner::new(builder.build());

    let (result, timings) = scanner
        .scan_file_with_timings(&cli.input, cli.export.as_deref())
        .with_context(|| format!("Failed to scan {}", cli.input.display()))?;

    if let Some(export) = &cli.export {
        info!("Preprocessed image written to {}", export.display());
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialize scan result")?;
        println!("{}", json);
    } else {
        print_report(&result);
    }

    if cli.timings {
        println!("\n{}", timings);
    }

    Ok(())
}

fn print_report(result: &ScanResult) {
    let diagnosis = &result.diagnosis;
    let upload = &result.upload_quality;

    println!("Diagnosis:     {}", diagnosis.label.display_name());
    println!(
        "Confidence:    {:.1}% ({:?})",
        diagnosis.confidence,
        diagnosis.confidence_level()
    );
    println!("Healthy:       {}", if diagnosis.is_healthy { "yes" } else { "no" });
    println!("Quality score: {:.0}", result.quality_score);

    println!(
        "Upload:        {}x{}{}{}",
        upload.width,
        upload.height,
        if upload.is_high_quality { "" } else { ", low resolution" },
        if upload.has_good_aspect { "" } else { ", unusual aspect ratio" },
    );

    println!("Scan id:       {}", result.scan_id);
    println!("Scanned at:    {}", result.timestamp_utc.to_rfc3339());
}
