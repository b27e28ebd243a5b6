//! Configuration management
//!
//! Settings come from, in increasing precedence: built-in defaults, the
//! config file (`~/.config/shiptivity/config.toml` or `--config`),
//! environment variables (`SHIPTIVITY_DB`, `SHIPTIVITY_HOST`,
//! `SHIPTIVITY_PORT`) and command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;

/// Environment variable overriding the database path
pub const ENV_DB: &str = "SHIPTIVITY_DB";
/// Environment variable overriding the listen host
pub const ENV_HOST: &str = "SHIPTIVITY_HOST";
/// Environment variable overriding the listen port
pub const ENV_PORT: &str = "SHIPTIVITY_PORT";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Database settings
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port` socket address string
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite file path
    #[serde(default = "paths::default_db")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: paths::default_db(),
        }
    }
}

impl Config {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from `path`, or the default location when `None`
    ///
    /// A missing file yields defaults; an unreadable or malformed file is
    /// an error so typos do not silently fall back.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path.map_or_else(Self::config_path, Path::to_path_buf);
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Self::from_toml(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {e}", path.display()))
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply environment overrides read through `lookup`
    ///
    /// An unparsable port is ignored with a warning.
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(db) = lookup(ENV_DB).filter(|v| !v.is_empty()) {
            self.database.path = PathBuf::from(db);
        }
        if let Some(host) = lookup(ENV_HOST).filter(|v| !v.is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => log::warn!("ignoring invalid {ENV_PORT}={port}"),
            }
        }
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }
}
