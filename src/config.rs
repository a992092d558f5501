//! Loading `typereveal.json`.
//!
//! ```json
//! {
//!   "propertyType": {
//!     "enabled": true,
//!     "message": "noTypeReference",
//!     "severity": "warning"
//!   }
//! }
//! ```
//!
//! Missing sections and fields fall back to their defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use typereveal_inspections::InspectionConfig;

pub const CONFIG_FILE_NAME: &str = "typereveal.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TypeRevealConfig {
    pub property_type: InspectionConfig,
}

pub fn parse_config(source: &str) -> Result<TypeRevealConfig> {
    let config = serde_json::from_str(source).context("failed to parse typereveal config JSON")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<TypeRevealConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = parse_config(&source)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Walk up from `start` looking for `typereveal.json`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Load the nearest config above `start`, or the defaults when there is none.
pub fn load_config_or_default(start: &Path) -> Result<TypeRevealConfig> {
    match find_config_file(start) {
        Some(path) => load_config(&path),
        None => Ok(TypeRevealConfig::default()),
    }
}
