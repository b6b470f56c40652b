//! InMemoryStore implementation
//!
//! HashMap-based store with RwLock for interior mutability.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::Record;
use crate::error::{Result, StoreError};
use crate::keysafe::Delimiters;
use crate::store::DataStore;

/// Mapping from entry name to its record
pub struct InMemoryStore {
    /// entry name → (field name → value)
    data: RwLock<HashMap<String, Record>>,

    /// Delimiters checked by `set_data`
    delimiters: Delimiters,
}

impl InMemoryStore {
    /// Create a new empty store with the default delimiters
    pub fn new() -> Self {
        Self::with_delimiters(Delimiters::default())
    }

    /// Create a new empty store validating against `delimiters`
    pub fn with_delimiters(delimiters: Delimiters) -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
            delimiters,
        }
    }

    /// Get a field value
    ///
    /// Fails with `EntryNotFound` if the entry is absent, or `FieldNotFound`
    /// if the entry exists without that field.
    pub fn get(&self, entry: &str, field: &str) -> Result<String> {
        let data = self.data.read();

        let record = data.get(entry).ok_or_else(|| StoreError::EntryNotFound {
            entry: entry.to_string(),
        })?;

        record
            .get(field)
            .cloned()
            .ok_or_else(|| StoreError::FieldNotFound {
                entry: entry.to_string(),
                field: field.to_string(),
            })
    }

    /// Insert or overwrite a field, creating the entry on first write
    ///
    /// No validation happens here; `set_data` is the checked path.
    pub fn set(&self, entry: &str, field: &str, value: &str) {
        let mut data = self.data.write();
        data.entry(entry.to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());
    }

    /// Check if an entry has at least one field
    pub fn contains_entry(&self, entry: &str) -> bool {
        self.data.read().contains_key(entry)
    }

    /// Number of entries
    pub fn entry_count(&self) -> usize {
        self.data.read().len()
    }

    /// Number of fields across all entries
    pub fn field_count(&self) -> usize {
        self.data.read().values().map(|record| record.len()).sum()
    }

    /// Check if the store holds nothing
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.data.write().clear();
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStore for InMemoryStore {
    fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    fn read_field(&self, entry: &str, field: &str) -> Result<String> {
        self.get(entry, field)
    }

    fn write_field(&self, entry: &str, field: &str, value: &str) -> Result<()> {
        self.set(entry, field, value);
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("entry_count", &self.entry_count())
            .field("delimiters", &self.delimiters)
            .finish()
    }
}
