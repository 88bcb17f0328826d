use crate::config::types::{ExtractorConfig, HttpConfig, MAX_TIMEOUT_SECS};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &ExtractorConfig) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates HTTP configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, config.timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    // Header values cannot carry control characters
    if config.user_agent.chars().any(|c| c.is_control()) {
        return Err(ConfigError::Validation(format!(
            "user_agent must not contain control characters, got '{}'",
            config.user_agent.escape_debug()
        )));
    }

    Ok(())
}
