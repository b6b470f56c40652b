//! Snapshot file storage
//!
//! Whole-map serialization: each operation loads the full map, and each
//! write stores it again. The format is private to this crate.
//!
//! ## File Format
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │ Header (14 bytes)                                             │
//! │   Magic: "FSNP" (4) | Version: u16 (2) | CRC32: u32 (4)       │
//! │   PayloadLen: u32 (4)                                         │
//! ├───────────────────────────────────────────────────────────────┤
//! │ Payload (PayloadLen bytes)                                    │
//! │   bincode-encoded HashMap<K, V>                               │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//! A zero-length file is a valid, empty snapshot.

mod backend;
mod file;
mod frame;

pub use backend::SnapshotBackend;
pub use file::SnapshotFile;

use crate::cached::CachedStore;
use crate::config::Config;
use crate::error::Result;

/// Magic bytes identifying a snapshot file
pub(crate) const MAGIC: &[u8; 4] = b"FSNP";

/// Current snapshot format version
pub(crate) const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) + CRC (4) + Len (4) = 14 bytes
pub(crate) const HEADER_SIZE: usize = 14;

/// Cached store over a snapshot file
pub type SnapshotFileStore = CachedStore<SnapshotBackend>;

impl CachedStore<SnapshotBackend> {
    /// Open the snapshot store `name` under the configured data directory
    pub fn snapshot_file(name: &str, config: &Config) -> Result<Self> {
        Ok(CachedStore::new(SnapshotBackend::open(name, config)?, config.delimiters))
    }
}
