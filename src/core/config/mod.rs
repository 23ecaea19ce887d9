//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! A single user-level file holds the [`StoreOptions`]. Every field has a
//! default, so a missing file is not an error.
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. An explicit path (the CLI's `--config`), which must exist
//! 2. `$OSTEO_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/osteo/config.toml`
//! 4. `~/.osteo/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use osteoref::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! println!("placeholders: {}", config.options.placeholders);
//! if let Some(path) = config.loaded_from() {
//!     println!("loaded from {}", path.display());
//! }
//! ```

pub mod schema;

pub use schema::{DisplayConfig, DuplicatePolicy, RegionCheck, StoreOptions};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "OSTEO_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("config file '{0}' does not exist")]
    NotFound(PathBuf),

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Store options, defaults applied
    pub options: StoreOptions,
    /// Path to the config file (if one was loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration.
    ///
    /// An `explicit` path takes precedence over the standard locations and
    /// must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed
    /// or validated, or if the explicit path is missing.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) if path.exists() => Some(path.to_path_buf()),
            Some(path) => return Err(ConfigError::NotFound(path.to_path_buf())),
            None => Self::discover(),
        };

        let options = match &path {
            Some(path) => Self::read_options(path)?,
            None => StoreOptions::default(),
        };
        options.validate()?;

        if let Some(path) = &path {
            tracing::debug!(path = %path.display(), "loaded config");
        }

        Ok(Config { options, path })
    }

    /// Find the first existing config file in the standard locations.
    fn discover() -> Option<PathBuf> {
        // 1. Check $OSTEO_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/osteo/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("osteo/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.osteo/config.toml
        dirs::home_dir()
            .map(|home| home.join(".osteo/config.toml"))
            .filter(|path| path.exists())
    }

    /// Read and parse a config file.
    fn read_options(path: &Path) -> Result<StoreOptions, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
