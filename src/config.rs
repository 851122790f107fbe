//! Client configuration.
//!
//! Loaded from (in order of precedence):
//! 1. Environment variables (`GLOSSAR_BASE_URL`, `GLOSSAR_TIMEOUT_SECS`)
//! 2. JSON file named by `GLOSSAR_CONFIG`
//! 3. Default values

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const CONFIG_PATH_VAR: &str = "GLOSSAR_CONFIG";
pub const BASE_URL_VAR: &str = "GLOSSAR_BASE_URL";
pub const TIMEOUT_VAR: &str = "GLOSSAR_TIMEOUT_SECS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and port of the glossary backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout; a hung request turns into a network error after this.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_save_endpoint")]
    pub save_endpoint: String,

    #[serde(default = "default_create_endpoint")]
    pub create_endpoint: String,

    #[serde(default = "default_save_success_route")]
    pub save_success_route: String,

    #[serde(default = "default_create_success_route")]
    pub create_success_route: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_save_endpoint() -> String {
    "/api/v1/speichern".to_string()
}

fn default_create_endpoint() -> String {
    "/api/v1/neu".to_string()
}

fn default_save_success_route() -> String {
    "/app/hauptseite".to_string()
}

fn default_create_success_route() -> String {
    "hauptseite".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            save_endpoint: default_save_endpoint(),
            create_endpoint: default_create_endpoint(),
            save_success_route: default_save_success_route(),
            create_success_route: default_create_success_route(),
        }
    }
}

impl ClientConfig {
    /// Reads a JSON config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Defaults, then the optional config file, then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(Path::new(path.trim()))?,
            _ => Self::default(),
        };

        config.apply_overrides(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Applies overrides from `lookup`, which maps a variable name to its value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BASE_URL_VAR) {
            let url = url.trim();
            if !url.is_empty() {
                self.base_url = url.to_string();
            }
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            self.timeout_secs = match raw.trim().parse::<u64>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidOverride {
                        var: TIMEOUT_VAR,
                        value: raw,
                    })
                }
            };
        }

        Ok(())
    }
}
