//! Application settings loaded from config.toml and the environment.
//!
//! The TOML file is optional; when it is absent every setting falls back to
//! its default. `BIND_ADDRESS` and `DATABASE_URL` from the environment (or a
//! `.env` file loaded by `main`) override whatever the file says.

use crate::config::database::DEFAULT_DATABASE_URL;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment variable naming the config file.
pub const CONFIG_PATH_VAR: &str = "PRODUCT_API_CONFIG";
/// Config file used when `PRODUCT_API_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Record store settings
    pub database: DatabaseConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// `[database]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SeaORM` connection URL
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config {
            message: format!("Failed to parse config file: {e}"),
        })
    }

    /// Loads configuration from `path`, or defaults if the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        tracing::debug!("Loading configuration from {:?}", path);
        let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("Failed to read config file {}: {e}", path.display()),
        })?;
        Self::from_toml(&contents)
    }

    /// Applies `BIND_ADDRESS` and `DATABASE_URL` overrides from `lookup`.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("BIND_ADDRESS") {
            self.server.bind_address = addr;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }
        self
    }
}

/// Loads the application configuration from the file named by
/// `PRODUCT_API_CONFIG` (default `config.toml`), then applies environment
/// overrides.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = AppConfig::load(&path)
        .inspect_err(|e| tracing::error!("Failed to load configuration from {}: {}", path, e))?
        .with_overrides(|key| std::env::var(key).ok());

    tracing::info!(
        bind_address = %config.server.bind_address,
        "Configuration loaded"
    );
    Ok(config)
}
