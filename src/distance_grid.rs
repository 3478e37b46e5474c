//! Grid-search estimator: the sampled pixel closest to all lines.
//!
//! The image is sampled on a square grid whose step is a tenth of the image
//! height. For each grid point the perpendicular distances to every line are
//! summed and the point with the smallest sum wins. Much coarser than the
//! intersection clustering and O(grid points × lines), but it always returns
//! a point inside the image, which is useful as a fallback for scenes where
//! clustering finds nothing.
use crate::line::Line;
use log::debug;
use nalgebra::Point2;
use serde::Serialize;

/// Best grid point and its summed distance to all lines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridEstimate {
    pub point: (usize, usize),
    pub distance_sum: f64,
}

/// Grid step used for an image of `height` pixels.
#[inline]
pub fn grid_step(height: usize) -> usize {
    (height / 10).max(1)
}

/// Scans grid points column by column (x outer, y inner). Ties are resolved
/// in favour of the later point; an empty scan reports `(0, 0)` with sum 0.
pub fn estimate_min_distance(lines: &[Line], width: usize, height: usize) -> GridEstimate {
    let mut best = GridEstimate {
        point: (0, 0),
        distance_sum: 0.0,
    };
    if lines.is_empty() || width == 0 || height == 0 {
        return best;
    }
    let step = grid_step(height);
    let mut first = true;
    let mut visited = 0usize;
    for x in (0..width).step_by(step) {
        for y in (0..height).step_by(step) {
            let p = Point2::new(x as f64, y as f64);
            let sum: f64 = lines.iter().map(|l| l.distance_to(&p)).sum();
            visited += 1;
            if first || sum <= best.distance_sum {
                best = GridEstimate {
                    point: (x, y),
                    distance_sum: sum,
                };
                first = false;
            }
        }
    }
    debug!(
        "VP-grid: {}x{} step={} points={} lines={} best=({}, {}) sum={:.3}",
        width,
        height,
        step,
        visited,
        lines.len(),
        best.point.0,
        best.point.1,
        best.distance_sum
    );
    best
}
