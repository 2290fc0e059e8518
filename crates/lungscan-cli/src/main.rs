//! Command-line front end for the `lungscan` detector.
//!
//! Loads a CT-scan image, runs the detection pipeline, prints the
//! case-count/laterality report, and optionally writes the annotated image
//! and a JSON report.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::{info, LevelFilter};
use serde::Serialize;

use lungscan::detect::{rgb_from_scan_image, scan};
use lungscan::{ScanParams, ScanReport, Side};
use lungscan_core::init_with_level;

#[derive(Parser, Debug)]
#[command(name = "lungscan", version, about = "Detect inflammation regions in a lung CT-scan image")]
struct Cli {
    /// Input CT-scan image (any format the `image` crate decodes).
    image: PathBuf,

    /// Write the annotated image (red case rings) to this path.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Load detection parameters from a JSON file instead of the defaults.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Scan(#[from] lungscan::ScanError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct JsonReport<'a> {
    image: String,
    case_count: usize,
    sides: &'a [Side],
    image_average: u8,
    fallback_band: bool,
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let _ = init_with_level(cli.log_level);

    let params = match &cli.params {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => ScanParams::default(),
    };

    let img = image::ImageReader::open(&cli.image)?.decode()?;
    info!(
        "loaded {} ({}x{})",
        cli.image.display(),
        img.width(),
        img.height()
    );

    let report = scan(&img, &params)?;

    if cli.json {
        let json = JsonReport {
            image: cli.image.display().to_string(),
            case_count: report.case_count,
            sides: &report.sides,
            image_average: report.image_average,
            fallback_band: report.fallback,
        };
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{}", report_line(&report));
    }

    if let Some(path) = &cli.output {
        rgb_from_scan_image(&report.image).save(path)?;
        info!("wrote annotated image to {}", path.display());
    }

    Ok(())
}

fn report_line(report: &ScanReport) -> String {
    let noun = if report.case_count == 1 { "case" } else { "cases" };
    match report.sides.as_slice() {
        [side] => format!("{} {} found: {} lung.", report.case_count, noun, side),
        [a, b] => format!("{} {} found: {} and {} lungs.", report.case_count, noun, a, b),
        _ => format!("{} {} found.", report.case_count, noun),
    }
}
