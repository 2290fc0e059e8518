//! Run the detector on an image file and print the report.
//!
//! ```sh
//! cargo run --example scan_report -- path/to/ct-scan.png
//! ```

use std::env;

use log::LevelFilter;

use lungscan::detect::scan;
use lungscan::ScanParams;
use lungscan_core::init_with_level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_with_level(LevelFilter::Info)?;

    let path = env::args()
        .nth(1)
        .ok_or("usage: scan_report <image-path>")?;
    let img = image::ImageReader::open(&path)?.decode()?;

    let report = scan(&img, &ScanParams::default())?;
    println!(
        "{}: {} case(s), sides {:?}, image average {}{}",
        path,
        report.case_count,
        report.sides,
        report.image_average,
        if report.fallback { " (fallback band)" } else { "" }
    );
    Ok(())
}
