use serde::{Deserialize, Serialize};

/// Integer translation between an outer frame and an inner frame centered
/// inside it.
///
/// The same offset serves both directions of the crop/remap pair: cropping
/// reads outer pixels at `to_outer`, remapping writes detections back at the
/// same offset. Keeping it one value makes the centering invariant testable
/// on its own.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FrameOffset {
    pub dx: usize,
    pub dy: usize,
}

impl FrameOffset {
    /// Offset that centers an `inner` frame inside an `outer` frame.
    ///
    /// Returns `None` when the inner frame does not fit. Odd size
    /// differences are split with the extra pixel on the right/bottom,
    /// matching integer halving.
    pub fn centered(outer: (usize, usize), inner: (usize, usize)) -> Option<Self> {
        let (ow, oh) = outer;
        let (iw, ih) = inner;
        if iw > ow || ih > oh {
            return None;
        }
        Some(Self {
            dx: (ow - iw) / 2,
            dy: (oh - ih) / 2,
        })
    }

    /// Map inner-frame coordinates to outer-frame coordinates.
    pub fn to_outer(self, x: usize, y: usize) -> (usize, usize) {
        (x + self.dx, y + self.dy)
    }
}
