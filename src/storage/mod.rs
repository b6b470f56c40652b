//! Storage Module
//!
//! Disk backends behind the cached store.
//!
//! ## Responsibilities
//! - Persist entry/field data to a single file per store
//! - Treat a missing file as an empty store
//! - Acquire and release file handles within each call
//!
//! ## Backends
//! - [`linefile`]: one human-readable line per entry, rewritten per write
//! - [`snapshot`]: the whole map serialized as one framed blob
//!
//! Neither backend locks its file. Concurrent writers on the same file race
//! their read-modify-write cycles and can lose updates.

pub mod linefile;
pub mod snapshot;

pub use linefile::{LineFileBackend, LineFileStore};
pub use snapshot::{SnapshotBackend, SnapshotFile, SnapshotFileStore};
