//! Optional configuration file.
//!
//! ```toml
//! maven_home = "/opt/maven"
//! color = "auto"
//! ```

use crate::cli::ColorMode;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "MVN_COLOR_CONFIG";

/// Wrapper configuration. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maven installation directory, containing `bin/mvn`.
    pub maven_home: Option<PathBuf>,
    /// Color mode used when `--color` is not given.
    pub color: Option<ColorMode>,
}

impl Config {
    /// Location of the config file.
    ///
    /// `$MVN_COLOR_CONFIG` if set, else `<config dir>/mvn-color/config.toml`.
    /// `None` when the platform has no config directory.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("mvn-color").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when there is none.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Error::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(path, &content)
    }

    /// Parse config file content; `path` is only used in errors.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
