//! I/O helpers for segment lists and JSON reports.
//!
//! - `load_segments`: read a JSON array of segments from disk.
//! - `parse_segments`: same, from an in-memory string.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Segments are accepted either flat (`[x1, y1, x2, y2]`) or wrapped once
//! (`[[x1, y1, x2, y2]]`), which is how probabilistic Hough transforms
//! commonly emit them. Anything else is rejected here, before it can reach
//! the geometry code.
use crate::segments::LineSegment;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum VpIoError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSegment {
    Flat([f64; 4]),
    Nested([[f64; 4]; 1]),
}

impl From<RawSegment> for LineSegment {
    fn from(raw: RawSegment) -> Self {
        match raw {
            RawSegment::Flat(v) => v.into(),
            RawSegment::Nested([v]) => v.into(),
        }
    }
}

pub fn parse_segments(json: &str) -> Result<Vec<LineSegment>, VpIoError> {
    let raw: Vec<RawSegment> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(LineSegment::from).collect())
}

/// Load segments from a JSON file.
pub fn load_segments(path: &Path) -> Result<Vec<LineSegment>, VpIoError> {
    let data = fs::read_to_string(path).map_err(|source| VpIoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_segments(&data)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), VpIoError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| VpIoError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), VpIoError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| VpIoError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
