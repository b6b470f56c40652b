//! Memory Module
//!
//! In-memory entry/field store.
//!
//! ## Responsibilities
//! - Standalone store for data that never needs to reach disk
//! - Cache layer in front of every disk backend
//! - Distinguish a missing entry from a missing field
//!
//! ## Data Structure Choice
//! Nested HashMaps wrapped in a RwLock:
//! - Insertion order carries no meaning in memory (the line format keeps
//!   its own order on disk)
//! - `&self` access lets cached stores refresh the cache during reads

mod table;

pub use table::InMemoryStore;

/// Fields of a single entry, keyed by field name
pub type Record = std::collections::HashMap<String, String>;
