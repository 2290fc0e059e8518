use lungscan_core::ScanImage;

/// Copy the `area`-sized square block whose top-left corner is at (n, m).
///
/// The caller keeps the block in bounds; an offset that runs past the image
/// edge panics. The source image is not touched.
pub fn sample_region(image: &ScanImage, n: usize, m: usize, area: usize) -> ScanImage {
    let mut region = ScanImage::blank(area, area);
    for y in 0..area {
        for x in 0..area {
            region.set(x, y, image.get(n + x, m + y));
        }
    }
    region
}
