//! Cached Module
//!
//! Write-through cache in front of a disk backend.
//!
//! ## Responsibilities
//! - Route reads through the deep (disk-first) or shallow (cache-first) policy
//! - Keep the cache and disk in step on every write
//! - Annotate not-found errors with where the lookup went
//!
//! ## Read Policies
//! ```text
//!   deep:     disk ──hit──▶ refresh cache ──▶ value
//!              └──miss──▶ NotFound(disk)
//!
//!   shallow:  cache ──hit──▶ value
//!              └──miss──▶ disk ──hit──▶ populate cache ──▶ value
//!                          └──miss──▶ NotFound(disk or cache)
//! ```

use tracing::{debug, trace};

use crate::error::{Result, Searched, StoreError};
use crate::keysafe::Delimiters;
use crate::memory::InMemoryStore;
use crate::store::DataStore;

/// Durable storage a [`CachedStore`] delegates to
pub trait DiskBackend {
    /// Read one field from durable storage
    ///
    /// Fails with a not-found class error when the entry, the field, or the
    /// backing storage itself is missing.
    fn read_from_disk(&self, entry: &str, field: &str) -> Result<String>;

    /// Persist one field to durable storage
    fn write_to_disk(&self, entry: &str, field: &str, value: &str) -> Result<()>;

    /// Short description for logs (usually the backing file path)
    fn describe(&self) -> String;
}

/// A store that caches a disk backend in memory
///
/// ## Consistency
///
/// - Writes go to the cache first, then to disk. If the disk write fails the
///   cache has already advanced; the two are not rolled back.
/// - Public reads are deep: disk is always authoritative, and a value found
///   on disk overwrites whatever the cache held.
/// - Nothing guards the backend's read-modify-write against other processes
///   or other instances on the same file.
pub struct CachedStore<B: DiskBackend> {
    /// Write-through cache
    cache: InMemoryStore,

    /// Durable storage
    backend: B,

    /// Delimiters checked by `set_data`
    delimiters: Delimiters,
}

impl<B: DiskBackend> CachedStore<B> {
    /// Put an empty cache in front of `backend`
    pub fn new(backend: B, delimiters: Delimiters) -> Self {
        Self {
            cache: InMemoryStore::with_delimiters(delimiters),
            backend,
            delimiters,
        }
    }

    /// Deep read: consult disk, refresh the cache, never fall back to it
    pub fn get_deep(&self, entry: &str, field: &str) -> Result<String> {
        let value = self
            .backend
            .read_from_disk(entry, field)
            .map_err(|e| annotate(Searched::Disk, e))?;

        debug!(entry, field, backend = %self.backend.describe(), "Refreshed cache from disk");
        self.cache.set(entry, field, &value);
        Ok(value)
    }

    /// Shallow read: prefer the cache, fall through to disk on a miss
    pub fn get_shallow(&self, entry: &str, field: &str) -> Result<String> {
        match self.cache.get(entry, field) {
            Ok(value) => {
                trace!(entry, field, "Cache hit");
                return Ok(value);
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        let value = self
            .backend
            .read_from_disk(entry, field)
            .map_err(|e| annotate(Searched::DiskOrCache, e))?;

        debug!(entry, field, backend = %self.backend.describe(), "Populated cache from disk");
        self.cache.set(entry, field, &value);
        Ok(value)
    }

    /// Write to the cache, then to disk
    pub fn put(&self, entry: &str, field: &str, value: &str) -> Result<()> {
        self.cache.set(entry, field, value);
        self.backend.write_to_disk(entry, field, value)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// The in-memory cache
    pub fn cache(&self) -> &InMemoryStore {
        &self.cache
    }

    /// The disk backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consume the store, keeping only the backend
    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl<B: DiskBackend> DataStore for CachedStore<B> {
    fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    fn read_field(&self, entry: &str, field: &str) -> Result<String> {
        self.get_deep(entry, field)
    }

    fn write_field(&self, entry: &str, field: &str, value: &str) -> Result<()> {
        self.put(entry, field, value)
    }
}

/// Wrap not-found errors with lookup context; pass real failures through
fn annotate(searched: Searched, err: StoreError) -> StoreError {
    if err.is_not_found() {
        StoreError::not_found_in(searched, err)
    } else {
        err
    }
}
