use serde::{Deserialize, Serialize};

/// Pure green, written over pixels whose intensity falls in the candidate
/// band. The green channel at 255 is what excludes a pixel from baseline
/// averages.
pub const CANDIDATE_MARK: Pixel = Pixel {
    red: 0,
    green: 255,
    blue: 0,
};

/// Pure red, drawn on the outer ring of a confirmed region.
pub const CASE_MARK: Pixel = Pixel {
    red: 255,
    green: 0,
    blue: 0,
};

/// One RGB pixel, channels in [0, 255].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    /// Gray pixel with all three channels equal.
    pub fn gray(value: u8) -> Self {
        Self {
            red: value,
            green: value,
            blue: value,
        }
    }

    /// Truncated unweighted mean of the three channels.
    pub fn intensity(self) -> u8 {
        ((self.red as u16 + self.green as u16 + self.blue as u16) / 3) as u8
    }

    /// Whether this pixel carries a candidate marker. A saturated green
    /// channel is the marker flag; a grayscale pixel can only reach
    /// green == 255 as pure white, which lies outside every candidate band.
    pub fn is_marked(self) -> bool {
        self.green == 255
    }

    /// Whether this pixel is a confirmed-case border mark.
    pub fn is_case_mark(self) -> bool {
        self == CASE_MARK
    }
}

/// Owned row-major RGB raster the pipeline stages pass between each other
/// by value.
///
/// Out-of-bounds access is a programmer error and panics; every stage that
/// samples sub-regions is responsible for keeping its offsets in bounds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScanImage {
    width: usize,
    height: usize,
    data: Vec<Pixel>,
}

impl ScanImage {
    /// All-black image of the given size.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![Pixel::default(); width * height],
        }
    }

    /// Build an image from a row-major pixel buffer.
    pub fn from_pixels(width: usize, height: usize, data: Vec<Pixel>) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "pixel buffer length {} does not match {}x{}",
            data.len(),
            width,
            height
        );
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Pixel {
        self.data[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) {
        let i = self.index(x, y);
        self.data[i] = pixel;
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.data.iter().copied()
    }

    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut Pixel> {
        self.data.iter_mut()
    }

    /// Pixels with their (x, y) positions, row-major.
    pub fn enumerate_pixels(&self) -> impl Iterator<Item = (usize, usize, Pixel)> + '_ {
        let width = self.width;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, p)| (i % width, i / width, *p))
    }
}
