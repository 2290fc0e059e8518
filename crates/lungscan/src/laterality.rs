//! Left/right lung classification of confirmed case marks.

use std::fmt;

use serde::{Deserialize, Serialize};

use lungscan_core::ScanImage;

/// Which lung a case mark falls in, by horizontal position.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Sides that contain at least one red case mark, in left-then-right order.
///
/// A mark strictly left of the midline column counts as `Left`, strictly
/// right as `Right`; marks exactly on the midline count toward neither.
pub fn locate_sides(image: &ScanImage) -> Vec<Side> {
    let midline = image.width() / 2;
    let mut left = false;
    let mut right = false;
    for (x, _, pixel) in image.enumerate_pixels() {
        if !pixel.is_case_mark() {
            continue;
        }
        if x < midline {
            left = true;
        } else if x > midline {
            right = true;
        }
        if left && right {
            break;
        }
    }

    let mut sides = Vec::new();
    if left {
        sides.push(Side::Left);
    }
    if right {
        sides.push(Side::Right);
    }
    sides
}
