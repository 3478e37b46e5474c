//! Vanishing-point estimation by intersection clustering.
//!
//! Given the line segments found in a photograph, the estimator looks for
//! the point where most of them appear to converge.
//!
//! Pipeline
//! - Angular filter: drop vertical segments and those within π/16 of the
//!   horizontal or π/8 of the vertical (`segments::filter_segments`).
//! - Line-count gate: fewer than 2 filtered lines cannot intersect, more than
//!   150 usually means foliage or texture; both end the run before any
//!   pairwise work.
//! - Pair sweep: every unordered pair of lines is intersected in row-major
//!   order; parallel pairs are skipped (`intersections`).
//! - Clustering: intersections are grouped incrementally around fixed keys
//!   with a 30 px tolerance (`cluster`).
//! - Selection: the largest cluster wins (earliest on ties) and its member
//!   mean, rounded to integer pixels, is the vanishing point.
//!
//! Notes
//! - Every call is pure and owns its intermediate state. The worst case is
//!   bounded by the gate at 150·149/2 = 11,175 intersections.
//! - Output depends on input order, through pair order and cluster creation
//!   order; identical inputs give bit-identical outputs.

mod engine;
pub mod params;

pub use engine::VanishingPointEstimator;
pub use params::{EstimatorParams, ParamsError};

use crate::segments::LineSegment;

/// Runs the estimator with default parameters on raw `(x1, y1, x2, y2)` tuples.
///
/// ```
/// use vanishing_point::estimate_vanishing_point;
///
/// let segments = [
///     (0.0, 0.0, 50.0, 50.0),
///     (0.0, 200.0, 50.0, 150.0),
///     (0.0, 50.0, 50.0, 75.0),
/// ];
/// assert_eq!(estimate_vanishing_point(&segments), Some((100, 100)));
/// assert_eq!(estimate_vanishing_point(&segments[..1]), None);
/// ```
pub fn estimate_vanishing_point(segments: &[(f64, f64, f64, f64)]) -> Option<(i64, i64)> {
    let segments: Vec<LineSegment> = segments.iter().copied().map(Into::into).collect();
    VanishingPointEstimator::default().estimate(&segments)
}
