//! Loading filter and engine configuration files.

use crate::error::{CliError, Result};
use linkage_engine::{EngineConfig, FilterConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

/// Load filters from a `.json` or TOML file, or the defaults with no path
pub fn load_filters(path: Option<&Path>) -> Result<FilterConfig> {
    let Some(path) = path else {
        return Ok(FilterConfig::default());
    };

    let contents = fs::read_to_string(path)?;
    let filters = if is_json(path) {
        serde_json::from_str(&contents)?
    } else {
        FilterConfig::from_toml(&contents).map_err(CliError::Config)?
    };
    filters
        .validate()
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;

    debug!("Loaded filters from {}", path.display());
    Ok(filters)
}

/// Load the engine configuration, or the defaults with no path
pub fn load_engine_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };

    let contents = fs::read_to_string(path)?;
    let config = if is_json(path) {
        serde_json::from_str(&contents)?
    } else {
        EngineConfig::from_toml(&contents).map_err(CliError::Config)?
    };
    config
        .validate()
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;

    debug!("Loaded engine configuration from {}", path.display());
    Ok(config)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
