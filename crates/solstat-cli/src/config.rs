//! Configuration file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use solstat_core::ReportConfig;
use tracing::{info, warn};

/// Layout of the configuration file
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    report: ReportConfig,
}

/// Load the report configuration, falling back to defaults when the file is missing
pub fn load(path: &Path) -> Result<ReportConfig> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Config file {} not found, using defaults", path.display());
            return Ok(ReportConfig::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let file: ConfigFile =
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    file.report.validate()?;
    info!("Loaded config from {}", path.display());
    Ok(file.report)
}
