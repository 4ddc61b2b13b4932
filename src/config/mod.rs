mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::{debug, warn};

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let config = load_from(&config_path).await?;
    Ok(config.with_api_key_override(env::var(API_KEY_ENV).ok()))
}

/// Reads a YAML config file, falling back to defaults when the file does not exist.
pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    if !tokio::fs::try_exists(path).await? {
        warn!(
            "Configuration file {} not found, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let config_str = tokio::fs::read_to_string(path).await?;
    parse(&config_str)
}

pub fn parse(yaml: &str) -> Result<Config> {
    // An empty document deserializes to unit, not to a mapping
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Replaces the configured API key with `key` when it is set and non-empty.
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.gemini.api_key = Some(key);
        }
        self
    }

    fn validate(&self) -> Result<()> {
        if self.gemini.base_url.trim().is_empty() {
            return Err(Error::config("gemini.base_url must not be empty"));
        }
        if self.gemini.model.trim().is_empty() {
            return Err(Error::config("gemini.model must not be empty"));
        }
        Ok(())
    }
}
