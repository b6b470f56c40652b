//! # fieldstore
//!
//! A small embedded key-value store with a two-level lookup:
//! - An *entry* names a record
//! - Within a record, named *fields* map to string values
//!
//! Three stores share one contract ([`DataStore`]): a pure in-memory store,
//! a line-encoded text file, and a whole-map snapshot file. The file-backed
//! stores sit behind a write-through cache.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              get_data / set_data  (DataStore)                │
//! │           (key-safe validation on every write)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 CachedStore<B: DiskBackend>                  │
//! │        (deep read: disk first / write: cache then disk)      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────────────┐
//!   │InMemoryStore│          │     DiskBackend      │
//!   │   (cache)   │          │ LineFile | Snapshot  │
//!   └─────────────┘          └──────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use fieldstore::{Config, DataStore, LineFileStore};
//!
//! let store = LineFileStore::line_file("office", &Config::default());
//! store.set_data("jobs", "mark", "sales")?;
//! assert_eq!(store.get_data("jobs", "mark")?, "sales");
//! # Ok::<(), fieldstore::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod keysafe;

pub mod store;
pub mod memory;
pub mod cached;
pub mod storage;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, Searched, StoreError};
pub use config::Config;
pub use keysafe::Delimiters;
pub use store::DataStore;
pub use memory::InMemoryStore;
pub use cached::{CachedStore, DiskBackend};
pub use storage::{LineFileBackend, LineFileStore, SnapshotBackend, SnapshotFile, SnapshotFileStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of fieldstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
