//! Snapshot backend
//!
//! Stores every entry as one value of a snapshot map.

use std::collections::BTreeMap;
use std::path::Path;

use super::SnapshotFile;
use crate::cached::DiskBackend;
use crate::config::Config;
use crate::error::{Result, StoreError};

/// Disk backend keeping entries in a snapshot file
#[derive(Debug)]
pub struct SnapshotBackend {
    file: SnapshotFile<String, BTreeMap<String, String>>,
}

impl SnapshotBackend {
    /// Backend for store `name`; creates the snapshot file if absent
    pub fn open(name: &str, config: &Config) -> Result<Self> {
        Self::at_path(config.snapshot_path(name))
    }

    /// Backend for an explicit snapshot path
    pub fn at_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            file: SnapshotFile::create(path.as_ref())?,
        })
    }

    /// The underlying snapshot file
    pub fn file(&self) -> &SnapshotFile<String, BTreeMap<String, String>> {
        &self.file
    }
}

impl DiskBackend for SnapshotBackend {
    fn read_from_disk(&self, entry: &str, field: &str) -> Result<String> {
        let mut map = self.file.load()?.unwrap_or_default();

        let mut record = map.remove(entry).ok_or_else(|| StoreError::EntryNotFound {
            entry: entry.to_string(),
        })?;

        record.remove(field).ok_or_else(|| StoreError::FieldNotFound {
            entry: entry.to_string(),
            field: field.to_string(),
        })
    }

    fn write_to_disk(&self, entry: &str, field: &str, value: &str) -> Result<()> {
        self.file.update(entry.to_string(), |record| {
            record.insert(field.to_string(), value.to_string());
        })
    }

    fn describe(&self) -> String {
        self.file.path().display().to_string()
    }
}
