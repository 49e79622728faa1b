//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::format::OutputFormat;
use crate::types::ConfigFile;
use std::path::Path;

/// The file name looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "herald.toml";

/// Loads and validates `<dir>/herald.toml`.
///
/// A missing file is not an error: the defaults are returned.
pub fn load_config(dir: &Path) -> Result<ConfigFile, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        tracing::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
        return Ok(ConfigFile::default());
    }
    load_config_file(&config_path)
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ConfigFile, ConfigError> {
    let config: ConfigFile =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that configured values are usable.
fn validate_config(config: &ConfigFile) -> Result<(), ConfigError> {
    let diagnostics = &config.diagnostics;
    if let Some(format) = &diagnostics.output_format {
        format.parse::<OutputFormat>()?;
    }
    if let Some(base) = &diagnostics.base_path {
        if base.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "diagnostics.base_path must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}
