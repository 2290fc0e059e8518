//! Sliding-window case confirmation.
//!
//! Drives the region sampler over the marked working image, confirms windows
//! whose unmarked-green average falls inside the adaptively selected
//! sensitivity band, and stamps a red ring around each confirmed window into
//! a running composite.

use log::{debug, warn};

use lungscan_core::{ScanImage, CASE_MARK};

use crate::params::ScanParams;
use crate::sampler::sample_region;
use crate::threshold::{select_band, unmarked_green_average, BaselineError, IntensityBand};

/// Result of one detection pass over a marked working image.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Detection {
    /// The working image with confirmed windows ring-marked in red.
    pub image: ScanImage,
    /// Number of confirmed windows. Overlapping windows are independent
    /// trials; none is counted twice.
    pub case_count: usize,
    /// Whole-image unmarked-green average the band was selected from.
    pub image_average: u8,
    /// The sensitivity band the windows were confirmed against.
    pub band: IntensityBand,
    /// True when the band came from the fallback calibration entry.
    pub fallback: bool,
}

/// Window-scan detector over a candidate-marked working image.
pub struct CaseDetector {
    params: ScanParams,
}

impl CaseDetector {
    pub fn new(params: ScanParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ScanParams {
        &self.params
    }

    /// Scan the marked image window by window and confirm cases.
    ///
    /// The whole-image baseline is computed once per call; the scan never
    /// mutates the image it classifies against, so per-window recomputation
    /// would only repeat the same value. Windows with no unmarked pixel have
    /// no usable baseline of their own and are skipped.
    pub fn detect(&self, image: ScanImage) -> Result<Detection, BaselineError> {
        let area = self.params.area_size;
        let step = self.params.step_size;

        let image_average = unmarked_green_average(&image)?;
        let selection = select_band(image_average);
        if selection.fallback {
            warn!(
                "image average {} matches no calibration entry; using fallback band [{}, {}]",
                image_average, selection.band.min, selection.band.max
            );
        }

        let mut composite = image.clone();
        let mut case_count = 0;
        for n in scan_offsets(image.width(), area, step) {
            for m in scan_offsets(image.height(), area, step) {
                let region = sample_region(&image, n, m, area);
                let region_average = match unmarked_green_average(&region) {
                    Ok(avg) => avg,
                    Err(BaselineError::FullyMarked) => {
                        debug!("window ({n}, {m}) is fully marked, skipping");
                        continue;
                    }
                };
                if selection.band.contains(region_average) {
                    case_count += 1;
                    draw_ring(&mut composite, n, m, area);
                }
            }
        }

        Ok(Detection {
            image: composite,
            case_count,
            image_average,
            band: selection.band,
            fallback: selection.fallback,
        })
    }
}

/// Window start offsets along one axis.
///
/// The scan bound deliberately uses half the window size so the stride keeps
/// one extra overlapping window near the far edge; offsets whose window
/// would leave the image are dropped.
fn scan_offsets(extent: usize, area: usize, step: usize) -> impl Iterator<Item = usize> {
    let limit = extent.saturating_sub(area / 2);
    (0..limit)
        .step_by(step.max(1))
        .filter(move |&offset| offset + area <= extent)
}

/// Draw the red case ring of the window at (n, m) into the composite.
///
/// Only the ring pixels are written, so rings of earlier confirmed windows
/// stay intact underneath later overlapping windows.
fn draw_ring(image: &mut ScanImage, n: usize, m: usize, area: usize) {
    for x in n..n + area {
        image.set(x, m, CASE_MARK);
        image.set(x, m + area - 1, CASE_MARK);
    }
    for y in m..m + area {
        image.set(n, y, CASE_MARK);
        image.set(n + area - 1, y, CASE_MARK);
    }
}
