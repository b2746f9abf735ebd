//! Environment-aware configuration loading.
//!
//! Handles file discovery, environment detection, and override merging:
//! `config/default` is always read when present, then
//! `config/{environment}`, then `SEARCH_NOTIFY_*` environment variables.

use std::path::Path;

use config::{Config, Environment, File};
use tracing::debug;

use super::{ConfigurationError, SearchNotifyConfig};

const ENV_PREFIX: &str = "SEARCH_NOTIFY";

/// Load configuration with environment auto-detection from the default
/// `config` directory.
pub fn load() -> Result<SearchNotifyConfig, ConfigurationError> {
    load_from_directory(Path::new("config"), &detect_environment())
}

/// Load configuration from a specific directory with an explicit
/// environment. Useful for testing without touching process environment
/// variables.
pub fn load_from_directory(
    config_dir: &Path,
    environment: &str,
) -> Result<SearchNotifyConfig, ConfigurationError> {
    debug!(
        environment,
        directory = %config_dir.display(),
        "loading configuration"
    );

    let settings = Config::builder()
        .add_source(File::from(config_dir.join("default")).required(false))
        .add_source(File::from(config_dir.join(environment)).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: SearchNotifyConfig = settings.try_deserialize()?;
    config.validate()?;

    debug!(
        destinations = config.search_api.web_hooks.len(),
        "configuration loaded"
    );

    Ok(config)
}

/// Current environment from `SEARCH_NOTIFY_ENV` or `APP_ENV`, defaulting
/// to `development`.
pub fn detect_environment() -> String {
    std::env::var("SEARCH_NOTIFY_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}
