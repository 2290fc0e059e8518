//! Intensity-based candidate marking.
//!
//! Collapses the scan to grayscale and overwrites every pixel inside the
//! candidate band with the pure-green marker. Only the exact marker value is
//! skipped on re-runs, so marking is idempotent while naturally
//! green-saturated input pixels still get grayscaled like any other.

use lungscan_core::{Pixel, ScanImage, CANDIDATE_MARK};

use crate::params::ScanParams;

/// Grayscale the image in place and mark candidate pixels.
///
/// A pixel whose truncated channel mean lies in
/// `[intensity_min, intensity_max]` (both inclusive) becomes `CANDIDATE_MARK`;
/// every other pixel becomes gray at its mean.
pub fn mark_candidates(mut image: ScanImage, params: &ScanParams) -> ScanImage {
    for pixel in image.pixels_mut() {
        if *pixel == CANDIDATE_MARK {
            continue;
        }
        let level = pixel.intensity();
        *pixel = if params.intensity_min <= level && level <= params.intensity_max {
            CANDIDATE_MARK
        } else {
            Pixel::gray(level)
        };
    }
    image
}
