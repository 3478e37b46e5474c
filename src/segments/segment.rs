use serde::{Deserialize, Serialize};

/// Line segment as reported by an upstream line detector, in pixel coordinates.
///
/// Serialized as a flat `[x1, y1, x2, y2]` array.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct LineSegment {
    pub p0: [f64; 2],
    pub p1: [f64; 2],
}

impl LineSegment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            p0: [x1, y1],
            p1: [x2, y2],
        }
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        self.p1[0] - self.p0[0]
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        self.p1[1] - self.p0[1]
    }

    /// Both endpoints share an x coordinate, so the slope is undefined.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.p0[0] == self.p1[0]
    }

    pub fn is_finite(&self) -> bool {
        self.p0.iter().chain(self.p1.iter()).all(|v| v.is_finite())
    }

    /// Slope `dy / dx`, or `None` for vertical segments.
    pub fn slope(&self) -> Option<f64> {
        if self.is_vertical() {
            None
        } else {
            Some(self.dy() / self.dx())
        }
    }
}

impl From<[f64; 4]> for LineSegment {
    fn from(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<(f64, f64, f64, f64)> for LineSegment {
    fn from((x1, y1, x2, y2): (f64, f64, f64, f64)) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<LineSegment> for [f64; 4] {
    fn from(seg: LineSegment) -> Self {
        [seg.p0[0], seg.p0[1], seg.p1[0], seg.p1[1]]
    }
}
