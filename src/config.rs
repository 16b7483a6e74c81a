//! Asset configuration file support.
//!
//! This module provides utilities for reading flavor-text asset locations
//! from TOML configuration files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub assets: AssetsConfig,
}

/// Flavor-text asset locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding the text assets.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// File name of the exclamations asset.
    #[serde(default = "default_exclamations")]
    pub exclamations: String,
    /// File name of the quotes asset.
    #[serde(default = "default_quotes")]
    pub quotes: String,
}

fn default_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_exclamations() -> String {
    "exclamations.txt".to_string()
}

fn default_quotes() -> String {
    "quotes.txt".to_string()
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            exclamations: default_exclamations(),
            quotes: default_quotes(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(Config)` if successful
    /// * `Err(Error)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Configuration(format!("failed to read config file: {}", e))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::Configuration(format!("failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load configuration from the default locations.
    ///
    /// Searches for `moonphase.toml` in the current directory and its
    /// parent, falling back to built-in defaults when no file is found or
    /// a found file fails to parse.
    pub fn from_default_locations() -> Self {
        for candidate in ["moonphase.toml", "../moonphase.toml"] {
            let path = Path::new(candidate);
            if path.exists() {
                if let Ok(config) = Self::from_file(path) {
                    return config;
                }
            }
        }
        Self::default()
    }
}

impl AssetsConfig {
    /// Path of the exclamations asset.
    pub fn exclamations_path(&self) -> PathBuf {
        self.dir.join(&self.exclamations)
    }

    /// Path of the quotes asset.
    pub fn quotes_path(&self) -> PathBuf {
        self.dir.join(&self.quotes)
    }
}
