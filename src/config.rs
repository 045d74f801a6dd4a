//! Panel configuration: TOML file with defaults, CLI flags win.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the panel and its backend client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Base URL of the backend HTTP API.
    pub base_url: String,
    /// TCP connection timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Per-request read timeout in seconds.
    pub request_timeout_secs: u64,
    /// Delay before the post-upload status re-check, in seconds.
    pub settle_delay_secs: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout_secs: 3,
            request_timeout_secs: 10,
            settle_delay_secs: 2,
        }
    }
}

/// Errors while reading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {detail}")]
    Io { path: String, detail: String },
    #[error("cannot parse {path}: {detail}")]
    Parse { path: String, detail: String },
}

impl PanelConfig {
    /// Load from a TOML file. Absent keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            detail: e.to_string(),
        })
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_secs(self.settle_delay_secs)
    }
}
