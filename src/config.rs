//! Configuration file support for gradle-resolve.
//!
//! Provides YAML-based configuration through `gradle-resolve.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "gradle-resolve.config.yml";

/// Hard ceiling for the configurable session timeout (4 hours)
const MAX_TIMEOUT_SECONDS: u64 = 4 * 60 * 60;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub excluded_scopes: Option<Vec<String>>,
    pub gradle_version: Option<String>,
    pub checksum_algorithm: Option<String>,
    pub repository_root: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub fail_on_issues: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref scopes) = config.excluded_scopes {
        for (i, pattern) in scopes.iter().enumerate() {
            if pattern.trim().is_empty() {
                bail!(
                    "Invalid config: excluded_scopes[{}] must not be empty.\n\n\
                     💡 Hint: Each excluded_scopes entry must be a scope name or wildcard pattern (e.g., \"test*\").",
                    i
                );
            }
        }
    }
    if let Some(seconds) = config.timeout_seconds {
        if seconds == 0 || seconds > MAX_TIMEOUT_SECONDS {
            bail!(
                "Invalid config: timeout_seconds must be between 1 and {}.\n\n\
                 💡 Hint: The timeout bounds one Gradle invocation.",
                MAX_TIMEOUT_SECONDS
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
