//! Configuration loading
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument or environment variable (handled by the binary)
//! 2. TOML config file
//! 3. Compiled default

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default HTTP bind address
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Default error log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "error.log";

/// Contents of an optional `config.toml`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub database: Option<PathBuf>,
    pub bind: Option<String>,
    pub debug: Option<bool>,
    pub log_file: Option<PathBuf>,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub database: Option<PathBuf>,
    pub bind: Option<String>,
    pub debug: bool,
    pub log_file: Option<PathBuf>,
}

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database: PathBuf,
    pub bind: String,
    /// In debug mode nothing is written to the log file
    pub debug: bool,
    pub log_file: PathBuf,
}

impl Config {
    /// Merge overrides, an optional TOML file and the compiled defaults
    ///
    /// With `config_path == None` the platform config location is tried;
    /// a missing file there is not an error. An explicitly named file must
    /// exist and parse.
    pub fn resolve(overrides: Overrides, config_path: Option<&Path>) -> Result<Config> {
        let file = match config_path {
            Some(path) => load_toml(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => load_toml(&path)?,
                _ => TomlConfig::default(),
            },
        };

        Ok(Config::merge(overrides, file))
    }

    /// Apply the priority order to already-loaded sources
    pub fn merge(overrides: Overrides, file: TomlConfig) -> Config {
        Config {
            database: overrides
                .database
                .or(file.database)
                .unwrap_or_else(default_database_path),
            bind: overrides
                .bind
                .or(file.bind)
                .unwrap_or_else(|| DEFAULT_BIND.to_string()),
            debug: overrides.debug || file.debug.unwrap_or(false),
            log_file: overrides
                .log_file
                .or(file.log_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}

/// Read and parse a TOML config file
pub fn load_toml(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    let config = toml::from_str(&content).map_err(|e| {
        Error::Config(format!("Failed to parse config file {}: {}", path.display(), e))
    })?;

    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Platform config file location: `<config_dir>/showbook/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("showbook").join("config.toml"))
}

/// Platform database location: `<data_local_dir>/showbook/showbook.db`
pub fn default_database_path() -> PathBuf {
    match dirs::data_local_dir() {
        Some(dir) => dir.join("showbook").join("showbook.db"),
        None => {
            warn!("No local data directory on this platform, using ./showbook.db");
            PathBuf::from("showbook.db")
        }
    }
}
