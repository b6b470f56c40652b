//! Configuration for fieldstore
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::keysafe::Delimiters;

/// Main configuration shared by the file-backed stores
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory holding the backing files.
    /// Defaults to `.`, the process working directory:
    ///   {data_dir}/
    ///     ├── {name}.txt       (line-encoded store)
    ///     └── {name}.snap      (snapshot store)
    pub data_dir: PathBuf,

    /// Suffix appended to a store name to form its line-encoded file
    pub line_suffix: String,

    /// Suffix appended to a store name to form its snapshot file
    pub snapshot_suffix: String,

    // -------------------------------------------------------------------------
    // Encoding Configuration
    // -------------------------------------------------------------------------
    /// Reserved characters of the line encoding
    pub delimiters: Delimiters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            line_suffix: ".txt".to_string(),
            snapshot_suffix: ".snap".to_string(),
            delimiters: Delimiters::default(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Path of the line-encoded file for a store name
    pub fn line_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}{}", name, self.line_suffix))
    }

    /// Path of the snapshot file for a store name
    pub fn snapshot_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}{}", name, self.snapshot_suffix))
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (where backing files live)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the suffix for line-encoded files
    pub fn line_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.line_suffix = suffix.into();
        self
    }

    /// Set the suffix for snapshot files
    pub fn snapshot_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.snapshot_suffix = suffix.into();
        self
    }

    /// Set the delimiters used by the line encoding
    pub fn delimiters(mut self, delimiters: Delimiters) -> Self {
        self.config.delimiters = delimiters;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
