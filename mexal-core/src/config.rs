//! Client configuration management.
//!
//! Handles loading, saving, and accessing the Mexal connection settings:
//! server coordinates, credentials, and logging preferences. Configuration
//! is persisted as TOML on disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{MexalError, MexalResult};

/// Top-level configuration for the Mexal client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MexalConfig {
    /// Server connection settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the Passepartout web API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Passepartout domain the installation belongs to.
    #[serde(default)]
    pub domain: String,

    /// API username.
    #[serde(default)]
    pub username: String,

    /// API password.
    #[serde(default)]
    pub password: String,

    /// Company identifier (the `Azienda` coordinate).
    #[serde(default)]
    pub company: String,

    /// Company fiscal year (the `Anno` coordinate).
    #[serde(default)]
    pub company_year: String,

    /// API request timeout in milliseconds.
    #[serde(default = "default_api_timeout")]
    pub api_timeout_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses the default location.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output.
    #[serde(default)]
    pub json_output: bool,
}

// Default value functions for serde

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

fn default_api_timeout() -> u64 {
    constants::DEFAULT_API_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            domain: String::new(),
            username: String::new(),
            password: String::new(),
            company: String::new(),
            company_year: String::new(),
            api_timeout_ms: default_api_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl MexalConfig {
    /// Load configuration from the default config file path.
    pub fn load_default() -> MexalResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> MexalResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: MexalConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> MexalResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| MexalError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> MexalResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| MexalError::Config("could not determine config directory".into()))?;
        Ok(base.join("mexal").join("config.toml"))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> MexalResult<PathBuf> {
        if self.logging.directory.is_empty() {
            let base = dirs::data_dir()
                .ok_or_else(|| MexalError::Config("could not determine data directory".into()))?;
            Ok(base.join("mexal").join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Check whether every mandatory connection field is present.
    pub fn is_configured(&self) -> bool {
        let s = &self.server;
        !s.domain.is_empty()
            && !s.username.is_empty()
            && !s.password.is_empty()
            && !s.company.is_empty()
            && !s.company_year.is_empty()
    }
}
