use crate::config::types::Config;
use crate::ConfigError;
use std::path::Path;
use url::Url;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

/// Validates a configuration, whether loaded from a file or built from defaults
///
/// Checks that the source URL parses as an absolute http(s) URL and that
/// the viewer page size is at least 1.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let url = Url::parse(&config.source.url)
        .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", config.source.url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "unsupported scheme '{}' in {}",
            url.scheme(),
            config.source.url
        )));
    }

    if config.viewer.page_size == 0 {
        return Err(ConfigError::Validation(
            "viewer.page-size must be at least 1".to_string(),
        ));
    }

    Ok(())
}
