//! End-to-end helpers over `image` crate types.

use image::{DynamicImage, Rgb, RgbImage};

use lungscan_core::{Pixel, ScanImage};

use crate::params::ScanParams;
use crate::pipeline::{LungScanner, ScanError, ScanReport};

/// Convert a decoded `image::RgbImage` into the pipeline's owned raster.
pub fn scan_image_from_rgb(img: &RgbImage) -> ScanImage {
    let pixels = img
        .pixels()
        .map(|&Rgb([red, green, blue])| Pixel { red, green, blue })
        .collect();
    ScanImage::from_pixels(img.width() as usize, img.height() as usize, pixels)
}

/// Convert a pipeline raster back into an `image::RgbImage` for encoding.
pub fn rgb_from_scan_image(img: &ScanImage) -> RgbImage {
    RgbImage::from_fn(img.width() as u32, img.height() as u32, |x, y| {
        let p = img.get(x as usize, y as usize);
        Rgb([p.red, p.green, p.blue])
    })
}

/// Run the full pipeline on a decoded image.
pub fn scan(img: &DynamicImage, params: &ScanParams) -> Result<ScanReport, ScanError> {
    let scanner = LungScanner::new(params.clone());
    scanner.analyze(scan_image_from_rgb(&img.to_rgb8()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_conversion_round_trips() {
        let mut rgb = RgbImage::new(3, 2);
        rgb.put_pixel(1, 0, Rgb([10, 20, 30]));
        rgb.put_pixel(2, 1, Rgb([200, 0, 5]));
        let scan = scan_image_from_rgb(&rgb);
        assert_eq!(
            scan.get(1, 0),
            Pixel {
                red: 10,
                green: 20,
                blue: 30
            }
        );
        assert_eq!(rgb_from_scan_image(&scan), rgb);
    }
}
