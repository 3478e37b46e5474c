use super::{ConfigError, EstimatorConfig};
use crate::estimator::EstimatorParams;
use crate::io::VpIoError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct VpDemoConfig {
    /// JSON file with the detected segments.
    pub input: PathBuf,
    #[serde(default)]
    pub estimator: EstimatorConfig,
    /// `[width, height]` of the source image; enables the grid-search estimate.
    #[serde(default)]
    pub image_size: Option<[usize; 2]>,
    pub output: VpDemoOutputConfig,
    /// `estimator` resolved and validated by [`load_config`].
    #[serde(skip)]
    pub params: EstimatorParams,
}

#[derive(Debug, Deserialize)]
pub struct VpDemoOutputConfig {
    pub result_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<VpDemoConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| VpIoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config: VpDemoConfig = serde_json::from_str(&data).map_err(VpIoError::from)?;
    config.params = config.estimator.resolve()?;
    Ok(config)
}
