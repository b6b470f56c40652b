//! SnapshotFile implementation
//!
//! A whole map persisted as one framed bincode blob.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::hash::Hash;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::frame;
use crate::error::{Result, StoreError};

/// A `HashMap<K, V>` that lives in a file
///
/// Every operation deserializes the whole file, and every mutation writes
/// the whole map back. There is no cache.
pub struct SnapshotFile<K, V> {
    path: PathBuf,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> SnapshotFile<K, V>
where
    K: Serialize + DeserializeOwned + Eq + Hash,
    V: Serialize + DeserializeOwned,
{
    /// Open the snapshot at `path`, creating an empty file if absent
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            OpenOptions::new().create(true).append(true).open(&path)?;
            debug!(path = %path.display(), "Created empty snapshot file");
        }
        Ok(Self {
            path,
            _marker: PhantomData,
        })
    }

    /// Get the value stored under `key`
    ///
    /// Fails with `KeyNotFound` if the file is empty or unreadable, or the
    /// key is absent. A damaged snapshot fails with `Corruption`.
    pub fn get(&self, key: &K) -> Result<V> {
        match self.load() {
            Ok(Some(mut map)) => map.remove(key).ok_or(StoreError::KeyNotFound),
            Ok(None) | Err(StoreError::StorageUnavailable { .. }) => Err(StoreError::KeyNotFound),
            Err(e) => Err(e),
        }
    }

    /// Store `value` under `key`, rewriting the whole file
    pub fn set(&self, key: K, value: V) -> Result<()> {
        self.modify(|map| {
            map.insert(key, value);
        })
    }

    /// Mutate the value under `key` in place, starting from `V::default()`
    pub fn update<F>(&self, key: K, f: F) -> Result<()>
    where
        V: Default,
        F: FnOnce(&mut V),
    {
        self.modify(|map| f(map.entry(key).or_default()))
    }

    /// Number of keys currently stored
    pub fn len(&self) -> Result<usize> {
        Ok(self.load()?.map(|map| map.len()).unwrap_or(0))
    }

    /// Check if no keys are stored
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Deserialize the whole map
    ///
    /// Returns `Ok(None)` for an empty or missing file.
    pub fn load(&self) -> Result<Option<HashMap<K, V>>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::StorageUnavailable {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if data.is_empty() {
            return Ok(None);
        }

        let payload = frame::decode(&data)?;
        Ok(Some(bincode::deserialize(payload)?))
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Load (empty or unreadable counts as empty), apply `f`, write back
    fn modify<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut HashMap<K, V>),
    {
        let mut map = match self.load() {
            Ok(map) => map.unwrap_or_default(),
            Err(StoreError::StorageUnavailable { source, .. }) => {
                warn!(path = %self.path.display(), error = %source, "Snapshot unreadable, starting from empty");
                HashMap::new()
            }
            Err(e) => return Err(e),
        };

        f(&mut map);

        let payload = bincode::serialize(&map)?;
        fs::write(&self.path, frame::encode(&payload)?)?;
        debug!(path = %self.path.display(), keys = map.len(), "Wrote snapshot");
        Ok(())
    }
}

impl<K, V> std::fmt::Debug for SnapshotFile<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotFile")
            .field("path", &self.path)
            .finish()
    }
}
