use crate::config::types::ExtractorConfig;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(ExtractorConfig)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<ExtractorConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> Result<ExtractorConfig, ConfigError> {
    let config: ExtractorConfig = toml::from_str(content)?;

    validate(&config)?;

    Ok(config)
}

/// Loads the configuration at `path`, or the defaults when no path is given
pub fn load_optional_config(path: Option<&Path>) -> Result<ExtractorConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(ExtractorConfig::default()),
    }
}
