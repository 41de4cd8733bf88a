//! Configuration file
//!
//! A JSON object; every field is optional. A missing file means all
//! defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;

use super::errors::{CliError, CliResult};

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// JSON array of customer records loaded at startup (default "./customers.json")
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Host, port and CORS settings
    #[serde(flatten)]
    pub server: HttpServerConfig,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("./customers.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            server: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults when the
    /// file does not exist
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }

        self.server.validate().map_err(CliError::config_error)
    }
}
