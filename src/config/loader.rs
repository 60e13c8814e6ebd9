//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GateConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::gate::MAINTENANCE_MODE;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
///
/// A `MAINTENANCE_MODE` process environment variable overrides the file's
/// binding of the same name.
pub fn load_config(path: &Path) -> Result<GateConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, std::env::var(MAINTENANCE_MODE).ok())
}

/// Config used when no file is given: defaults plus the env override.
pub fn default_config() -> Result<GateConfig, ConfigError> {
    parse_config("", std::env::var(MAINTENANCE_MODE).ok())
}

/// Parse, apply the maintenance override, and validate.
pub fn parse_config(
    content: &str,
    maintenance_override: Option<String>,
) -> Result<GateConfig, ConfigError> {
    let mut config: GateConfig = toml::from_str(content)?;

    if let Some(value) = maintenance_override {
        config.vars.insert(MAINTENANCE_MODE.to_string(), value);
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
