//! Endpoint configuration.
//!
//! One setting: the hub URL. Layered as built-in default ← optional TOML
//! file ← `SPOKE_HUB_URL` environment variable.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EndpointError, EndpointResult};

/// Hub URL used when neither the config file nor the environment sets one.
pub const DEFAULT_HUB_URL: &str = "ws://127.0.0.1:4840/";

/// Environment variable overriding the hub URL.
pub const HUB_URL_ENV: &str = "SPOKE_HUB_URL";

/// Endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// URL of the remote dispatch hub.
    pub hub_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            hub_url: DEFAULT_HUB_URL.to_owned(),
        }
    }
}

impl EndpointConfig {
    /// Load settings: the built-in default, overlaid by the TOML file at
    /// `path` (if given), overlaid by the environment.
    ///
    /// # Errors
    ///
    /// [`EndpointError::Config`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> EndpointResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(env::var(HUB_URL_ENV).ok());
        Ok(config)
    }

    /// Parse settings from a TOML file. Unset fields keep their defaults.
    ///
    /// # Errors
    ///
    /// [`EndpointError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> EndpointResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| EndpointError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| EndpointError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply the environment override. Empty values are ignored.
    fn apply_env(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.is_empty()) {
            self.hub_url = url;
        }
    }
}
