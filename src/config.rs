//! Engine configuration.
//!
//! ```toml
//! source = "data/DerivedName.txt"
//! ucd_version = "16.0.0"
//! verify_categories = true
//! ```
//!
//! Every key is optional. A relative `source` in a config file is resolved
//! against the directory containing that file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::{SOURCE_FILE_NAME, UCD_VERSION};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path of the `DerivedName.txt`-style name source.
    pub source: PathBuf,
    /// UCD version the first line of the source must mention.
    pub ucd_version: String,
    /// Reject sources that name a control, private-use, surrogate or
    /// noncharacter code point.
    pub verify_categories: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(SOURCE_FILE_NAME),
            ucd_version: UCD_VERSION.to_string(),
            verify_categories: true,
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        if config.source.is_relative() {
            if let Some(dir) = path.parent() {
                config.source = dir.join(&config.source);
            }
        }
        debug!(
            config = %path.display(),
            source = %config.source.display(),
            ucd_version = %config.ucd_version,
            "loaded charnames config"
        );
        Ok(config)
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_ucd_version(mut self, version: impl Into<String>) -> Self {
        self.ucd_version = version.into();
        self
    }

    pub fn with_verify_categories(mut self, verify: bool) -> Self {
        self.verify_categories = verify;
        self
    }
}
