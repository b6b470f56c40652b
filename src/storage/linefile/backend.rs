//! Line-encoded file backend
//!
//! Thin read-transform-write wrapper around the codec. The file is read and
//! written whole on every operation; no handle is kept between calls.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::codec::{self, DecodedEntry};
use crate::cached::DiskBackend;
use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::keysafe::Delimiters;

/// Disk backend storing one entry per line
#[derive(Debug, Clone)]
pub struct LineFileBackend {
    /// Backing file (need not exist yet)
    path: PathBuf,

    /// Reserved characters of the encoding
    delimiters: Delimiters,
}

impl LineFileBackend {
    /// Backend for store `name` under the configured data directory
    ///
    /// The file is not created until the first write.
    pub fn open(name: &str, config: &Config) -> Self {
        Self {
            path: config.line_path(name),
            delimiters: config.delimiters,
        }
    }

    /// Backend for an explicit file path with the given delimiters
    pub fn at_path(path: impl Into<PathBuf>, delimiters: Delimiters) -> Self {
        Self {
            path: path.into(),
            delimiters,
        }
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode every readable entry in file order
    ///
    /// A missing file yields no entries.
    pub fn entries(&self) -> Result<Vec<DecodedEntry>> {
        match self.read_contents() {
            Ok(contents) => Ok(codec::decode(contents.lines(), &self.delimiters)),
            Err(StoreError::StorageUnavailable { source, .. })
                if source.kind() == ErrorKind::NotFound =>
            {
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Read the whole file, mapping any failure to `StorageUnavailable`
    fn read_contents(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|source| StoreError::StorageUnavailable {
            path: self.path.clone(),
            source,
        })
    }
}

impl DiskBackend for LineFileBackend {
    fn read_from_disk(&self, entry: &str, field: &str) -> Result<String> {
        let contents = self.read_contents()?;
        codec::lookup(contents.lines(), &self.delimiters, entry, field)
    }

    fn write_to_disk(&self, entry: &str, field: &str, value: &str) -> Result<()> {
        // Only a file that does not exist yet may start from empty; any other
        // read failure would drop the records already in it.
        let existing = match self.read_contents() {
            Ok(contents) => contents,
            Err(StoreError::StorageUnavailable { source, .. })
                if source.kind() == ErrorKind::NotFound =>
            {
                debug!(path = %self.path.display(), "Starting line file from empty");
                String::new()
            }
            Err(StoreError::StorageUnavailable { source, .. }) => {
                return Err(StoreError::Io(source))
            }
            Err(e) => return Err(e),
        };

        let lines: Vec<&str> = existing.lines().collect();
        let updated = codec::rewrite(&lines, &self.delimiters, entry, field, value);

        let mut contents = String::with_capacity(existing.len() + field.len() + value.len() + 4);
        for line in &updated {
            contents.push_str(line);
            contents.push('\n');
        }

        debug!(
            path = %self.path.display(),
            entry,
            field,
            lines = updated.len(),
            "Rewrote line file"
        );
        fs::write(&self.path, contents)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
