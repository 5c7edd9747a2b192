//! Optional packer configuration (`PackerConfig.json`).

use crate::CONFIG_FILE;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Settings read from `PackerConfig.json` in the plugin directory.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PackerConfig {
    /// Engine versions to package for, in order.
    #[serde(rename = "EngineVersions", default)]
    engine_versions: Vec<Value>,
}

impl PackerConfig {
    /// Load the configuration from a plugin directory.
    ///
    /// A missing, unreadable or malformed file is not an error: it simply
    /// means there is no override.
    #[must_use]
    pub fn load<P: AsRef<Path>>(dir: P) -> Option<Self> {
        let path = dir.as_ref().join(CONFIG_FILE);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No packer configuration at {}: {}", path.display(), e);
                return None;
            }
        };

        match Self::from_json(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                debug!("Ignoring malformed {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Parse configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Engine versions listed in the configuration.
    ///
    /// Numbers are accepted as well as strings (`5.1` reads as `"5.1"`);
    /// any other entry is skipped.
    #[must_use]
    pub fn engine_versions(&self) -> Vec<String> {
        self.engine_versions
            .iter()
            .filter_map(|value| match value {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect()
    }
}

/// Decide which engine versions to package for.
///
/// Precedence: an explicit command-line version, then a non-empty
/// `EngineVersions` list from the configuration, then the engine version the
/// descriptor declares.
#[must_use]
pub fn select_engine_versions(
    cli_override: Option<&str>,
    config: Option<&PackerConfig>,
    descriptor_engine_version: &str,
) -> Vec<String> {
    if let Some(version) = cli_override {
        return vec![version.to_string()];
    }

    let configured = config.map(PackerConfig::engine_versions).unwrap_or_default();
    if !configured.is_empty() {
        return configured;
    }

    vec![descriptor_engine_version.to_string()]
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
