//! Parameter types configuring the estimator stages.
//!
//! Defaults reproduce the constants of the archive's analysis routine:
//! a π/16 exclusion band, a 30 px cluster tolerance and the [2, 150]
//! filtered-line window.

use crate::angle::DEFAULT_EPSILON;
use crate::cluster::{MembershipRule, DEFAULT_TOLERANCE_PX};
use crate::diagnostics::NoEstimateReason;

/// Fewest filtered lines that can produce an intersection.
pub const DEFAULT_MIN_LINES: usize = 2;
/// Above this many filtered lines the scene is treated as clutter.
pub const DEFAULT_MAX_LINES: usize = 150;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParamsError {
    #[error("epsilon must be finite and non-negative, got {0}")]
    Epsilon(f64),
    #[error("cluster tolerance must be finite and positive, got {0}")]
    Tolerance(f64),
    #[error("line-count window is empty: min_lines={min} > max_lines={max}")]
    LineWindow { min: usize, max: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct EstimatorParams {
    /// Horizontal exclusion half-band in radians; the vertical band is `2 * epsilon`.
    pub epsilon: f64,
    /// Maximum key distance (pixels, exclusive) for joining a cluster.
    pub cluster_tolerance: f64,
    pub min_lines: usize,
    pub max_lines: usize,
    pub membership: MembershipRule,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            cluster_tolerance: DEFAULT_TOLERANCE_PX,
            min_lines: DEFAULT_MIN_LINES,
            max_lines: DEFAULT_MAX_LINES,
            membership: MembershipRule::default(),
        }
    }
}

impl EstimatorParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(ParamsError::Epsilon(self.epsilon));
        }
        if !self.cluster_tolerance.is_finite() || self.cluster_tolerance <= 0.0 {
            return Err(ParamsError::Tolerance(self.cluster_tolerance));
        }
        if self.min_lines > self.max_lines {
            return Err(ParamsError::LineWindow {
                min: self.min_lines,
                max: self.max_lines,
            });
        }
        Ok(())
    }

    /// Returns the reason to stop when `filtered` lines fall outside the window.
    pub fn line_count_gate(&self, filtered: usize) -> Option<NoEstimateReason> {
        if filtered > self.max_lines {
            Some(NoEstimateReason::TooManyLines)
        } else if filtered < self.min_lines {
            Some(NoEstimateReason::TooFewLines)
        } else {
            None
        }
    }
}
