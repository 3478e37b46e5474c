//! JSON configuration for the demo tools.
//!
//! Every field has a default, so an empty object yields the stock estimator.

pub mod estimator;
pub mod vp_demo;

pub use estimator::EstimatorConfig;

use crate::estimator::ParamsError;
use crate::io::VpIoError;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] VpIoError),
    #[error("invalid estimator parameters: {0}")]
    Params(#[from] ParamsError),
}
