//! Configuration loading
//!
//! Reads an optional JSON file. Every field has a default, so a partial
//! file (or no file at all) is valid.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::services::aggregator::DEFAULT_TOP_LIMIT;
use crate::services::logger::LogLevel;
use crate::types::{CarDealsError, Result, DEFAULT_LOCATION};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP server binds to
    pub host: String,
    pub port: u16,
    /// Location used when a search does not name one
    pub default_location: String,
    /// How many deals `/search` and `check` return
    pub top_limit: usize,
    /// Minimum level written to stderr
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            default_location: DEFAULT_LOCATION.to_string(),
            top_limit: DEFAULT_TOP_LIMIT,
            log_level: LogLevel::Info,
        }
    }
}

impl Config {
    /// Load from `path` if given, else from the default location if that file exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse a config file; a missing file is an error
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CarDealsError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| CarDealsError::Config(format!("invalid {}: {}", path.display(), e)))
    }

    /// Default config path (~/.car-deals/config.json)
    pub fn default_path() -> Option<PathBuf> {
        let home = directories::UserDirs::new()?.home_dir().to_path_buf();
        Some(home.join(".car-deals").join("config.json"))
    }

    /// `host:port` string for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
