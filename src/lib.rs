#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod estimator;
pub mod io;
pub mod segments;

// Building blocks of the estimator; public for tools and tests.
pub mod angle;
pub mod cluster;
pub mod config;
pub mod distance_grid;
pub mod intersections;
pub mod line;

// --- High-level re-exports -------------------------------------------------

pub use crate::estimator::{estimate_vanishing_point, EstimatorParams, VanishingPointEstimator};
pub use crate::segments::LineSegment;

pub use crate::diagnostics::{EstimateOutcome, EstimateReport, NoEstimateReason};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::cluster::MembershipRule;
    pub use crate::line::Line;
    pub use crate::{EstimatorParams, LineSegment, VanishingPointEstimator};
}
