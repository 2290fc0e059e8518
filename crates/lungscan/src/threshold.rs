//! Contrast-adaptive sensitivity selection.
//!
//! The whole-image unmarked-green average keys an ordered calibration table
//! of (contrast range, sensitivity band) entries. The table is a coarse
//! lookup tuned to typical scan brightness profiles, not a learned function;
//! the gaps between entries and the wide fallback band are known limitations
//! of the calibration, not defects to paper over.

use serde::{Deserialize, Serialize};

use lungscan_core::ScanImage;

/// Closed interval of average-intensity values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct IntensityBand {
    pub min: u8,
    pub max: u8,
}

impl IntensityBand {
    pub fn contains(self, value: u8) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Open interval of whole-image averages an entry responds to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct ContrastRange {
    lo: u8,
    hi: u8,
}

impl ContrastRange {
    fn contains(self, value: u8) -> bool {
        self.lo < value && value < self.hi
    }
}

/// Band used when the whole-image average matches no calibration entry.
pub const FALLBACK_BAND: IntensityBand = IntensityBand { min: 10, max: 20 };

/// Calibration table, evaluated in order.
const CALIBRATION: [(ContrastRange, IntensityBand); 3] = [
    (
        ContrastRange { lo: 80, hi: 85 },
        IntensityBand { min: 108, max: 110 },
    ),
    (
        ContrastRange { lo: 130, hi: 135 },
        IntensityBand { min: 140, max: 142 },
    ),
    (
        ContrastRange { lo: 105, hi: 110 },
        IntensityBand { min: 186, max: 188 },
    ),
];

/// Raised when an average is requested for an image with no unmarked pixels.
#[derive(thiserror::Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum BaselineError {
    #[error("every pixel carries a candidate marker; the image has no intensity baseline")]
    FullyMarked,
}

/// Truncated mean of the green channel over unmarked pixels only.
///
/// Marked pixels (green == 255) are excluded from both the sum and the
/// denominator, so candidate markers never inflate the baseline.
pub fn unmarked_green_average(image: &ScanImage) -> Result<u8, BaselineError> {
    let mut sum = 0u64;
    let mut unmarked = 0u64;
    for pixel in image.pixels() {
        if pixel.is_marked() {
            continue;
        }
        sum += pixel.green as u64;
        unmarked += 1;
    }
    if unmarked == 0 {
        return Err(BaselineError::FullyMarked);
    }
    Ok((sum / unmarked) as u8)
}

/// Outcome of a calibration lookup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BandSelection {
    pub band: IntensityBand,
    /// True when no calibration entry matched and the fallback band applies.
    pub fallback: bool,
}

/// Map a whole-image average to its sensitivity band.
///
/// Total and deterministic: every input hits exactly one table entry or the
/// fallback. Range edges are open, so the edge values themselves fall
/// through to the fallback.
pub fn select_band(image_average: u8) -> BandSelection {
    for (range, band) in CALIBRATION {
        if range.contains(image_average) {
            return BandSelection {
                band,
                fallback: false,
            };
        }
    }
    BandSelection {
        band: FALLBACK_BAND,
        fallback: true,
    }
}
