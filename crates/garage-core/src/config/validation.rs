use crate::config::types::GarageConfig;
use crate::errors::ConfigError;

/// Validate a fully merged configuration.
///
/// The base URL must be an absolute `http`/`https` URL, and any configured
/// durations must be non-zero.
pub fn validate_config(config: &GarageConfig) -> Result<(), ConfigError> {
    let base_url = config.api.base_url();
    let parsed = reqwest::Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    if config.api.timeout_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "api.timeout_secs must be greater than 0".to_string(),
        });
    }

    if config.ui.notification_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "ui.notification_secs must be greater than 0".to_string(),
        });
    }

    Ok(())
}
