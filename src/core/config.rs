//! User-level configuration
//!
//! Settings that are per-user rather than per-project: the Wheel-Size API
//! key and an alternate API endpoint. Values come from a config file under
//! the platform config directory; environment variables win over the file.

use std::fs;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::fitment::DEFAULT_API_BASE;

/// User configuration, loaded from `config.yaml` in the platform config dir
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Wheel-Size API user key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Override for the fitment API base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

impl Config {
    /// Load the user config, falling back to defaults. Never fails: a
    /// missing or unreadable file is the same as an empty one.
    pub fn load() -> Self {
        let Some(dirs) = ProjectDirs::from("", "", "treadfit") else {
            return Config::default();
        };
        let path = dirs.config_dir().join("config.yaml");
        match fs::read_to_string(&path) {
            Ok(content) => serde_yml::from_str(&content).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    }

    /// Resolve the API key: `WHEELSIZE_API_KEY` wins over the config file
    pub fn api_key(&self) -> Option<String> {
        std::env::var("WHEELSIZE_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.api_key.clone())
    }

    /// Resolve the API base URL: `WHEELSIZE_API_BASE` wins over the config
    /// file, which wins over the default endpoint
    pub fn api_base(&self) -> String {
        std::env::var("WHEELSIZE_API_BASE")
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| self.api_base.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }
}
