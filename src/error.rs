//! Error types for fieldstore
//!
//! Provides a unified error type for all store operations.
//!
//! Not-found errors come in tiers (entry, field, key, storage) so callers can
//! tell a missing record apart from a missing field. Cached stores wrap the
//! tier error in [`StoreError::NotFound`] to record where the lookup went;
//! use [`StoreError::root`] or the `is_*` helpers to classify through it.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Where a failed lookup searched before giving up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Searched {
    /// Deep read: only the disk backend was consulted
    Disk,

    /// Shallow read: the cache missed, then the disk backend missed
    DiskOrCache,
}

impl fmt::Display for Searched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Searched::Disk => f.write_str("disk"),
            Searched::DiskOrCache => f.write_str("disk or cache"),
        }
    }
}

/// Unified error type for fieldstore operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("You can't include a [{delimiter}] in a set field: {value:?}")]
    InvalidField { value: String, delimiter: char },

    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("The [entry] couldn't be found: {entry:?}")]
    EntryNotFound { entry: String },

    #[error("The [value] couldn't be found: field {field:?} in entry {entry:?}")]
    FieldNotFound { entry: String, field: String },

    #[error("Key not found")]
    KeyNotFound,

    #[error("Could not get [{source}] from {searched}")]
    NotFound {
        searched: Searched,
        #[source]
        source: Box<StoreError>,
    },

    #[error("Could not parse field {field:?} of entry {entry:?}: {reason}")]
    Parse {
        entry: String,
        field: String,
        reason: String,
    },

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage unavailable at {}: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Snapshot corruption detected: {0}")]
    Corruption(String),
}

impl StoreError {
    /// Wrap a lookup failure with the places that were searched
    pub(crate) fn not_found_in(searched: Searched, source: StoreError) -> Self {
        StoreError::NotFound {
            searched,
            source: Box::new(source),
        }
    }

    /// The innermost error, looking through `NotFound` context
    pub fn root(&self) -> &StoreError {
        match self {
            StoreError::NotFound { source, .. } => source.root(),
            other => other,
        }
    }

    /// True for every "nothing stored here" error, whatever the tier
    ///
    /// An unavailable backing file counts: a missing file behaves like a file
    /// with no matching data.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.root(),
            StoreError::EntryNotFound { .. }
                | StoreError::FieldNotFound { .. }
                | StoreError::KeyNotFound
                | StoreError::StorageUnavailable { .. }
        )
    }

    /// True when the whole record is missing
    pub fn is_entry_not_found(&self) -> bool {
        matches!(self.root(), StoreError::EntryNotFound { .. })
    }

    /// True when the record exists but the field does not
    pub fn is_field_not_found(&self) -> bool {
        matches!(self.root(), StoreError::FieldNotFound { .. })
    }
}

impl From<bincode::Error> for StoreError {
    fn from(err: bincode::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
