//! Angular filter applied before intersection clustering.
//!
//! Near-horizontal and near-vertical segments carry little information about
//! the convergence point of receding edges (horizons, door frames, building
//! verticals), so they are removed together with segments whose slope is
//! undefined. A segment is kept iff
//!
//! - `x1 != x2`,
//! - `theta > epsilon`, and
//! - `|theta - π/2| > 2 * epsilon`,
//!
//! where `theta = atan(|dy / dx|)`. Surviving segments keep their input order;
//! the downstream pair sweep and cluster tie-breaks depend on it.
use super::LineSegment;
use crate::angle::{inclination, is_near_horizontal, is_near_vertical};
use serde::Serialize;

/// Counters emitted by [`filter_segments`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterDiagnostics {
    pub total: usize,
    pub kept: usize,
    /// `x1 == x2`, or non-finite coordinates.
    pub degenerate: usize,
    pub near_horizontal: usize,
    pub near_vertical: usize,
}

impl FilterDiagnostics {
    pub fn rejected(&self) -> usize {
        self.total - self.kept
    }
}

/// Keeps the segments that are neither vertical nor within the angular
/// exclusion bands around the horizontal (`epsilon`) and vertical (`2 * epsilon`).
pub fn filter_segments(
    segments: &[LineSegment],
    epsilon: f64,
) -> (Vec<LineSegment>, FilterDiagnostics) {
    let mut diag = FilterDiagnostics {
        total: segments.len(),
        ..Default::default()
    };
    let mut kept = Vec::with_capacity(segments.len());
    for seg in segments {
        if !seg.is_finite() {
            diag.degenerate += 1;
            continue;
        }
        let Some(theta) = inclination(seg.dx(), seg.dy()) else {
            diag.degenerate += 1;
            continue;
        };
        if is_near_vertical(theta, epsilon) {
            diag.near_vertical += 1;
            continue;
        }
        if is_near_horizontal(theta, epsilon) {
            diag.near_horizontal += 1;
            continue;
        }
        kept.push(*seg);
    }
    diag.kept = kept.len();
    (kept, diag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::DEFAULT_EPSILON;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn at_angle(theta: f64) -> LineSegment {
        LineSegment::new(0.0, 0.0, 100.0 * theta.cos(), 100.0 * theta.sin())
    }

    #[test]
    fn drops_vertical_and_banded_segments() {
        let segments = vec![
            LineSegment::new(10.0, 0.0, 10.0, 50.0),  // vertical
            LineSegment::new(0.0, 0.0, 100.0, 5.0),   // ~2.9°, near horizontal
            LineSegment::new(0.0, 0.0, 5.0, 100.0),   // ~87°, near vertical
            LineSegment::new(0.0, 0.0, 100.0, 100.0), // 45°
        ];
        let (kept, diag) = filter_segments(&segments, DEFAULT_EPSILON);
        assert_eq!(kept, vec![segments[3]]);
        assert_eq!(diag.total, 4);
        assert_eq!(diag.kept, 1);
        assert_eq!(diag.degenerate, 1);
        assert_eq!(diag.near_horizontal, 1);
        assert_eq!(diag.near_vertical, 1);
        assert_eq!(diag.rejected(), 3);
    }

    #[test]
    fn band_edges() {
        let eps = DEFAULT_EPSILON;
        // just inside the bands
        let inside = [0.99 * eps, FRAC_PI_2 - 1.99 * eps, PI - 0.99 * eps];
        // just outside the bands
        let outside = [1.01 * eps, FRAC_PI_2 - 2.01 * eps, PI / 4.0];
        for theta in inside {
            let (kept, _) = filter_segments(&[at_angle(theta)], eps);
            assert!(kept.is_empty(), "theta={theta} should be rejected");
        }
        for theta in outside {
            let (kept, _) = filter_segments(&[at_angle(theta)], eps);
            assert_eq!(kept.len(), 1, "theta={theta} should be kept");
        }
    }

    #[test]
    fn preserves_input_order() {
        let segments: Vec<LineSegment> = (0..6)
            .map(|i| LineSegment::new(0.0, i as f64, 50.0, 40.0 + i as f64 * 3.0))
            .collect();
        let (kept, diag) = filter_segments(&segments, DEFAULT_EPSILON);
        assert_eq!(diag.kept, segments.len());
        assert_eq!(kept, segments);
    }

    #[test]
    fn non_finite_counts_as_degenerate() {
        let seg = LineSegment::new(f64::NAN, 0.0, 10.0, 10.0);
        let (kept, diag) = filter_segments(&[seg], DEFAULT_EPSILON);
        assert!(kept.is_empty());
        assert_eq!(diag.degenerate, 1);
    }
}
