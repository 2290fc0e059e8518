//! Working-frame crop and detection remapping.
//!
//! Both directions share one [`FrameOffset`]: the crop reads original pixels
//! at the centered offset, and the remap writes red case marks back at the
//! same offset computed from the fixed working resolution.

use lungscan_core::{FrameOffset, ScanImage};

use crate::params::ScanParams;

#[derive(thiserror::Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum CropError {
    #[error("image {width}x{height} is smaller than the {working_width}x{working_height} working frame")]
    TooSmall {
        width: usize,
        height: usize,
        working_width: usize,
        working_height: usize,
    },
}

fn centered_offset(original: &ScanImage, params: &ScanParams) -> Result<FrameOffset, CropError> {
    FrameOffset::centered(
        (original.width(), original.height()),
        params.working_size(),
    )
    .ok_or(CropError::TooSmall {
        width: original.width(),
        height: original.height(),
        working_width: params.working_width,
        working_height: params.working_height,
    })
}

/// Centered crop to the working resolution.
///
/// An image already at the working size passes through unchanged.
pub fn crop_to_working(image: ScanImage, params: &ScanParams) -> Result<ScanImage, CropError> {
    let (ww, wh) = params.working_size();
    if (image.width(), image.height()) == (ww, wh) {
        return Ok(image);
    }
    let offset = centered_offset(&image, params)?;
    let mut cropped = ScanImage::blank(ww, wh);
    for y in 0..wh {
        for x in 0..ww {
            let (ox, oy) = offset.to_outer(x, y);
            cropped.set(x, y, image.get(ox, oy));
        }
    }
    Ok(cropped)
}

/// Transfer red case marks from the working-resolution detection image onto
/// a copy of the original.
///
/// Only pure-red pixels move; green candidate markers are discarded here.
/// With no red pixels the result is byte-identical to the original.
pub fn remap_to_original(
    detected: &ScanImage,
    original: &ScanImage,
    params: &ScanParams,
) -> Result<ScanImage, CropError> {
    let offset = centered_offset(original, params)?;
    let mut out = original.clone();
    for (x, y, pixel) in detected.enumerate_pixels() {
        if pixel.is_case_mark() {
            let (ox, oy) = offset.to_outer(x, y);
            out.set(ox, oy, pixel);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lungscan_core::{Pixel, CANDIDATE_MARK, CASE_MARK};

    fn params_4x3() -> ScanParams {
        ScanParams {
            working_width: 4,
            working_height: 3,
            ..ScanParams::default()
        }
    }

    #[test]
    fn crop_is_identity_at_working_size() {
        let image = ScanImage::from_pixels(4, 3, (0u8..12).map(Pixel::gray).collect());
        let cropped = crop_to_working(image.clone(), &params_4x3()).unwrap();
        assert_eq!(cropped, image);
    }

    #[test]
    fn crop_takes_the_centered_window() {
        let mut image = ScanImage::blank(8, 5);
        // working frame of 4x3 inside 8x5 starts at (2, 1)
        image.set(2, 1, Pixel::gray(7));
        image.set(5, 3, Pixel::gray(9));
        let cropped = crop_to_working(image, &params_4x3()).unwrap();
        assert_eq!(cropped.get(0, 0), Pixel::gray(7));
        assert_eq!(cropped.get(3, 2), Pixel::gray(9));
    }

    #[test]
    fn crop_rejects_undersized_images() {
        let image = ScanImage::blank(3, 3);
        assert_eq!(
            crop_to_working(image, &params_4x3()),
            Err(CropError::TooSmall {
                width: 3,
                height: 3,
                working_width: 4,
                working_height: 3,
            })
        );
    }

    #[test]
    fn remap_without_marks_is_byte_identical() {
        let original = ScanImage::from_pixels(8, 5, (0u8..40).map(Pixel::gray).collect());
        let detected = ScanImage::blank(4, 3);
        let out = remap_to_original(&detected, &original, &params_4x3()).unwrap();
        assert_eq!(out, original);
    }

    #[test]
    fn remap_shifts_marks_by_the_centered_offset() {
        let original = ScanImage::blank(8, 5);
        let mut detected = ScanImage::blank(4, 3);
        detected.set(0, 0, CASE_MARK);
        detected.set(3, 2, CASE_MARK);
        let out = remap_to_original(&detected, &original, &params_4x3()).unwrap();
        assert!(out.get(2, 1).is_case_mark());
        assert!(out.get(5, 3).is_case_mark());
        assert!(!out.get(0, 0).is_case_mark());
    }

    #[test]
    fn remap_discards_candidate_markers() {
        let original = ScanImage::blank(8, 5);
        let mut detected = ScanImage::blank(4, 3);
        detected.set(1, 1, CANDIDATE_MARK);
        let out = remap_to_original(&detected, &original, &params_4x3()).unwrap();
        assert_eq!(out, original);
    }
}
