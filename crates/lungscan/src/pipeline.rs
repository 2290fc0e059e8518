//! End-to-end scan pipeline.
//!
//! Threads one image through the stages by ownership: centered crop to the
//! working frame, candidate marking, window scan, remap back to the original
//! resolution, laterality lookup. Each stage consumes its input and returns
//! a new (or the same, mutated) image; no stage keeps a reference to an
//! image it has handed on.

use log::info;

use lungscan_core::ScanImage;

use crate::classify::mark_candidates;
use crate::compose::{crop_to_working, remap_to_original, CropError};
use crate::detector::CaseDetector;
use crate::laterality::{locate_sides, Side};
use crate::params::ScanParams;
use crate::threshold::BaselineError;

/// Errors an end-to-end scan can surface.
#[derive(thiserror::Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum ScanError {
    #[error(transparent)]
    Crop(#[from] CropError),

    #[error(transparent)]
    Baseline(#[from] BaselineError),
}

/// Outcome of a full scan.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScanReport {
    /// The original image with confirmed regions ring-marked in red.
    pub image: ScanImage,
    /// Number of confirmed scan windows.
    pub case_count: usize,
    /// Lungs containing at least one confirmed mark, left first.
    pub sides: Vec<Side>,
    /// Whole-image baseline the sensitivity band was selected from.
    pub image_average: u8,
    /// True when the fallback calibration band was used.
    pub fallback: bool,
}

/// The full detection pipeline behind one entry point.
pub struct LungScanner {
    params: ScanParams,
    detector: CaseDetector,
}

impl LungScanner {
    pub fn new(params: ScanParams) -> Self {
        let detector = CaseDetector::new(params.clone());
        Self { params, detector }
    }

    pub fn params(&self) -> &ScanParams {
        &self.params
    }

    /// Run the pipeline on an original-resolution image.
    pub fn analyze(&self, original: ScanImage) -> Result<ScanReport, ScanError> {
        let cropped = crop_to_working(original.clone(), &self.params)?;
        let marked = mark_candidates(cropped, &self.params);
        let detection = self.detector.detect(marked)?;
        info!(
            "confirmed {} window(s) at image average {}",
            detection.case_count, detection.image_average
        );

        let image = remap_to_original(&detection.image, &original, &self.params)?;
        let sides = locate_sides(&image);

        Ok(ScanReport {
            image,
            case_count: detection.case_count,
            sides,
            image_average: detection.image_average,
            fallback: detection.fallback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lungscan_core::Pixel;

    fn uniform(width: usize, height: usize, level: u8) -> ScanImage {
        ScanImage::from_pixels(width, height, vec![Pixel::gray(level); width * height])
    }

    #[test]
    fn uniform_qualifying_image_confirms_the_full_grid() {
        // Gray 15 survives candidate marking untouched, lands in the
        // fallback band, and every in-bounds window confirms.
        let scanner = LungScanner::new(ScanParams::default());
        let report = scanner.analyze(uniform(400, 300, 15)).unwrap();
        assert_eq!(report.case_count, 35);
        assert!(report.fallback);
        assert_eq!(report.image_average, 15);
        assert_eq!(report.sides, vec![Side::Left, Side::Right]);
    }

    #[test]
    fn non_qualifying_image_reports_nothing() {
        let scanner = LungScanner::new(ScanParams::default());
        let original = uniform(400, 300, 50);
        let report = scanner.analyze(original.clone()).unwrap();
        assert_eq!(report.case_count, 0);
        assert!(report.sides.is_empty());
        // No red marks, so the remap output is byte-identical to the input.
        assert_eq!(report.image, original);
    }

    #[test]
    fn oversized_original_keeps_marks_inside_the_centered_frame() {
        let scanner = LungScanner::new(ScanParams::default());
        let report = scanner.analyze(uniform(600, 400, 15)).unwrap();
        assert_eq!(report.case_count, 35);
        // Working frame sits at (100, 50)..(500, 350); outside it the
        // original gray survives.
        assert!(report.image.get(100, 50).is_case_mark());
        assert_eq!(report.image.get(0, 0), Pixel::gray(15));
        assert_eq!(report.image.get(599, 399), Pixel::gray(15));
        assert_eq!(report.sides, vec![Side::Left, Side::Right]);
    }

    #[test]
    fn undersized_original_is_rejected() {
        let scanner = LungScanner::new(ScanParams::default());
        let err = scanner.analyze(uniform(399, 300, 15)).unwrap_err();
        assert!(matches!(err, ScanError::Crop(_)));
    }

    #[test]
    fn candidate_heavy_image_with_no_baseline_errors() {
        // Every pixel inside the candidate band: marking turns the whole
        // working frame green and the detector has no baseline left.
        let scanner = LungScanner::new(ScanParams::default());
        let err = scanner.analyze(uniform(400, 300, 220)).unwrap_err();
        assert_eq!(err, ScanError::Baseline(BaselineError::FullyMarked));
    }
}
