/*!
 * Configuration support for the NPI registry client
 *
 * Provides runtime configuration for the registry endpoint and the HTTP
 * handle built from it.
 */

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for [`crate::RegistryClient`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Base URL of the registry endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for HTTP requests in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Custom user agent string (None to use the transport default)
    #[serde(default = "default_user_agent")]
    pub user_agent: Option<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions for serde
fn default_base_url() -> String {
    crate::constants::REGISTRY_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> Option<String> {
    Some(format!("npi-registry-rust/{}", env!("CARGO_PKG_VERSION")))
}

impl RegistryConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    ///
    /// Supported environment variables:
    /// - `NPI_REGISTRY_BASE_URL`: registry endpoint URL
    /// - `NPI_REGISTRY_TIMEOUT_SECONDS`: request timeout in seconds
    /// - `NPI_REGISTRY_USER_AGENT`: user agent string ("none" to unset)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("NPI_REGISTRY_BASE_URL") {
            if !val.is_empty() {
                config.base_url = val;
            }
        }

        if let Ok(val) = std::env::var("NPI_REGISTRY_TIMEOUT_SECONDS") {
            if let Ok(seconds) = val.parse() {
                config.timeout_seconds = seconds;
            }
        }

        if let Ok(val) = std::env::var("NPI_REGISTRY_USER_AGENT") {
            config.user_agent = match val.to_lowercase().as_str() {
                "none" | "" => None,
                _ => Some(val),
            };
        }

        config
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            crate::NpiRegistryError::Configuration {
                message: format!("Failed to read config file: {}", e),
                suggestion: Some("Check that the file exists and is readable".to_string()),
            }
        })?;
        let config: Self =
            toml::from_str(&contents).map_err(|e| crate::NpiRegistryError::Configuration {
                message: format!("Failed to parse config file: {}", e),
                suggestion: Some("Check that the file is valid TOML format".to_string()),
            })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| crate::NpiRegistryError::Configuration {
                message: format!("Failed to serialize config: {}", e),
                suggestion: None,
            })?;
        std::fs::write(path, contents).map_err(|e| crate::NpiRegistryError::Configuration {
            message: format!("Failed to write config file: {}", e),
            suggestion: None,
        })?;
        Ok(())
    }

    /// Get the default configuration file path
    ///
    /// Returns `~/.config/npi-registry/config.toml` on Unix-like systems
    /// or `%APPDATA%\npi-registry\config.toml` on Windows
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "npi-registry")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location, environment, or defaults
    ///
    /// Priority order:
    /// 1. Default config file (if exists)
    /// 2. Environment variables
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Some(config_path) = Self::default_config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::from_file(&config_path) {
                    return config;
                }
            }
        }

        Self::from_env()
    }
}

// Global configuration support
use std::sync::RwLock;

lazy_static::lazy_static! {
    static ref GLOBAL_CONFIG: RwLock<Option<RegistryConfig>> = RwLock::new(None);
}

/// Set the global configuration
pub fn set_global_config(config: RegistryConfig) {
    *GLOBAL_CONFIG.write().unwrap() = Some(config);
}

/// Get the global configuration (or load one if not set)
pub fn global_config() -> RegistryConfig {
    GLOBAL_CONFIG
        .read()
        .unwrap()
        .as_ref()
        .cloned()
        .unwrap_or_else(RegistryConfig::load)
}

/// Clear the global configuration
pub fn clear_global_config() {
    *GLOBAL_CONFIG.write().unwrap() = None;
}

/// Builder for customizing configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: RegistryConfig,
}

impl ConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the registry endpoint URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.config.timeout_seconds = seconds;
        self
    }

    /// Set the user agent string
    pub fn user_agent(mut self, user_agent: Option<String>) -> Self {
        self.config.user_agent = user_agent;
        self
    }

    /// Build the configuration
    pub fn build(self) -> RegistryConfig {
        self.config
    }
}
