//! Centralized path definitions for shiptivity
//!
//! ## Storage Layout
//!
//! ```text
//! ./clients.db                      # Default database (working directory)
//!
//! ~/.config/shiptivity/
//! └── config.toml                   # Server and database settings
//! ```

use std::path::PathBuf;

/// Default database filename
pub const DEFAULT_DB_FILE: &str = "clients.db";

/// Global config directory name
const GLOBAL_DIR: &str = "shiptivity";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global shiptivity config directory.
///
/// Falls back to `./.shiptivity` when the platform has no config dir.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".shiptivity"), |dir| dir.join(GLOBAL_DIR))
}

/// Get path to the global config file.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Default database path, relative to the working directory.
#[must_use]
pub fn default_db() -> PathBuf {
    PathBuf::from(DEFAULT_DB_FILE)
}
