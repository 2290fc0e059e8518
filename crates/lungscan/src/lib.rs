//! Heuristic inflammation-region detector for lung CT-scan images.
//!
//! The pipeline crops the scan to a fixed 400x300 working frame, collapses
//! it to grayscale, marks pixels inside a fixed candidate intensity band in
//! pure green, then slides a square window across the frame and confirms
//! windows whose unmarked-intensity average falls inside a sensitivity band
//! chosen from the whole-image contrast. Confirmed windows get a red ring,
//! the rings are remapped back onto the original resolution, and the result
//! is reported as a case count plus left/right lung membership.
//!
//! This is a deterministic fixed-threshold heuristic, not a validated
//! diagnostic tool.
//!
//! ## Quickstart
//!
//! ```
//! use lungscan::{LungScanner, ScanParams};
//! use lungscan_core::ScanImage;
//!
//! let scanner = LungScanner::new(ScanParams::default());
//! let report = scanner.analyze(ScanImage::blank(400, 300))?;
//! println!("{} case(s), sides {:?}", report.case_count, report.sides);
//! # Ok::<(), lungscan::ScanError>(())
//! ```

pub mod classify;
pub mod compose;
pub mod detector;
pub mod laterality;
pub mod params;
pub mod pipeline;
pub mod sampler;
pub mod threshold;

#[cfg(feature = "image")]
pub mod detect;

pub use compose::CropError;
pub use detector::{CaseDetector, Detection};
pub use laterality::Side;
pub use params::ScanParams;
pub use pipeline::{LungScanner, ScanError, ScanReport};
pub use threshold::{BaselineError, IntensityBand};

pub use lungscan_core as core;
