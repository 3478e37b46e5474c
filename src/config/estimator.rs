use crate::cluster::MembershipRule;
use crate::estimator::params::{DEFAULT_MAX_LINES, DEFAULT_MIN_LINES};
use crate::estimator::{EstimatorParams, ParamsError};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Horizontal exclusion band in degrees. `None` keeps the exact π/16 default.
    pub epsilon_deg: Option<f64>,
    /// Cluster tolerance in pixels.
    pub cluster_tolerance_px: f64,
    pub min_lines: usize,
    pub max_lines: usize,
    pub membership: MembershipRule,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        let params = EstimatorParams::default();
        Self {
            epsilon_deg: None,
            cluster_tolerance_px: params.cluster_tolerance,
            min_lines: DEFAULT_MIN_LINES,
            max_lines: DEFAULT_MAX_LINES,
            membership: params.membership,
        }
    }
}

impl EstimatorConfig {
    pub fn resolve(&self) -> Result<EstimatorParams, ParamsError> {
        let defaults = EstimatorParams::default();
        let params = EstimatorParams {
            epsilon: self
                .epsilon_deg
                .map(f64::to_radians)
                .unwrap_or(defaults.epsilon),
            cluster_tolerance: self.cluster_tolerance_px,
            min_lines: self.min_lines,
            max_lines: self.max_lines,
            membership: self.membership,
        };
        params.validate()?;
        Ok(params)
    }
}
