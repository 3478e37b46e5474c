//! Input line segments and the angular pre-filter.
//!
//! Segments come from an external line detector (e.g. probabilistic Hough)
//! and are treated as plain endpoint pairs. The filter removes everything that
//! cannot contribute a useful intersection before the pairwise sweep.

mod filter;
mod segment;

pub use filter::{filter_segments, FilterDiagnostics};
pub use segment::LineSegment;
