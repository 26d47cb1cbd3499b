//! Configuration loading and validation for the tracking service.
//!
//! Uses serde_yaml to load YAML configuration files with support for
//! environment variable overrides for sensitive credentials.

mod app;
mod error;
mod storage;
mod utmify;

pub use app::AppConfig;
pub use error::ConfigError;
pub use storage::StorageConfig;
pub use utmify::UtmifyConfig;

use serde::Deserialize;
use std::{env, fs};

/// Root configuration structure for the tracking service.
///
/// Required sections: app, utmify.
/// Optional sections: storage.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Application-level settings like name and environment.
    pub app: AppConfig,
    /// UTMify reporting settings.
    pub utmify: UtmifyConfig,
    /// Attribution persistence (optional).
    pub storage: Option<StorageConfig>,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    ///
    /// First loads environment variables from `.env` file (if exists),
    /// then loads YAML config and credentials from environment variables:
    /// - `UTMIFY_API_TOKEN`
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore error if not found)
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        config.load_credentials_from_env();
        config.validate()?;

        Ok(config)
    }

    /// Load credentials from environment variables.
    fn load_credentials_from_env(&mut self) {
        if self.utmify.enabled {
            self.utmify.api_token = env::var("UTMIFY_API_TOKEN").unwrap_or_default();
        }
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.is_empty() {
            return Err(ConfigError::Validation("app.name is required".into()));
        }

        let is_production = self.app.env != "development";

        // Only require the token in production/staging
        if self.utmify.enabled && is_production && self.utmify.api_token.is_empty() {
            return Err(ConfigError::Validation(
                "utmify: API token not found (set UTMIFY_API_TOKEN env var)".into(),
            ));
        }

        if let Some(ref storage) = self.storage {
            if storage.enabled && storage.path.as_deref().unwrap_or("").is_empty() {
                return Err(ConfigError::Validation(
                    "storage.path is required when storage is enabled".into(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
