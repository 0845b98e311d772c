//! CLI command implementations.

pub mod config;
pub mod path;
pub mod scan;
pub mod select;

use std::path::PathBuf;

use offlinelayer::config::FeatureConfig;

use crate::error::CliError;

/// Resolve the directory to operate on: an explicit `--dir` wins, then the
/// configured directory, then the platform default.
pub fn resolve_dir(explicit: Option<PathBuf>) -> Result<PathBuf, CliError> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    let config = FeatureConfig::load()?;
    Ok(config.offline_dir)
}
