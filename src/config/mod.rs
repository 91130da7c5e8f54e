mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

/// Environment variable that overrides `inference.api_key`.
pub const API_KEY_ENV: &str = "HUGGINGFACE_API_KEY";

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_with(&config_path, env::var(API_KEY_ENV).ok()).await
}

/// Loads `path`, applies an API key override, and validates the result.
pub async fn load_with(path: impl AsRef<Path>, api_key: Option<String>) -> Result<Config> {
    let mut config = load_from(path).await?;

    if let Some(key) = api_key {
        debug!("Using API key from {}", API_KEY_ENV);
        config.inference.api_key = key;
    }

    config.validate()?;
    Ok(config)
}

/// Reads a YAML config file; a missing file yields the defaults.
pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();

    if !tokio::fs::try_exists(path).await? {
        debug!("No configuration file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Rejects configurations the server must not start with.
    pub fn validate(&self) -> Result<()> {
        let key = self.inference.api_key.trim();
        if key.is_empty() || key == API_KEY_PLACEHOLDER {
            return Err(Error::config(format!(
                "Hugging Face API key is missing. Set {} or inference.api_key to your actual key",
                API_KEY_ENV
            )));
        }

        if self.inference.timeout_secs == 0 {
            return Err(Error::config("inference.timeout_secs must be greater than zero"));
        }

        if self.inference.endpoint.trim().is_empty() {
            return Err(Error::config("inference.endpoint must not be empty"));
        }

        Ok(())
    }
}
