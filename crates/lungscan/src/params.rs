use serde::{Deserialize, Serialize};

/// Fixed calibration of the detection pipeline.
///
/// The defaults reproduce the reference thresholds; tests shrink the window
/// geometry to keep fixtures small.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScanParams {
    /// Lower edge of the candidate intensity band, inclusive.
    pub intensity_min: u8,
    /// Upper edge of the candidate intensity band, inclusive.
    pub intensity_max: u8,
    /// Side length of the square scan window, in pixels.
    pub area_size: usize,
    /// Horizontal and vertical stride between scan windows.
    pub step_size: usize,
    /// Width of the working frame all detection runs at.
    pub working_width: usize,
    /// Height of the working frame.
    pub working_height: usize,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            intensity_min: 210,
            intensity_max: 245,
            area_size: 100,
            step_size: 50,
            working_width: 400,
            working_height: 300,
        }
    }
}

impl ScanParams {
    pub fn working_size(&self) -> (usize, usize) {
        (self.working_width, self.working_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_thresholds() {
        let p = ScanParams::default();
        assert_eq!((p.intensity_min, p.intensity_max), (210, 245));
        assert_eq!((p.area_size, p.step_size), (100, 50));
        assert_eq!(p.working_size(), (400, 300));
    }

    #[test]
    fn serde_round_trip() {
        let p = ScanParams::default();
        let json = serde_json::to_string(&p).unwrap();
        let back: ScanParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back.area_size, p.area_size);
        assert_eq!(back.working_size(), p.working_size());
    }
}
