//! Line-encoded file storage
//!
//! Human-readable text file, one entry per line.
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ jobs-mark:sales,kenneth:sales,jane:marketing,\n          │
//! │ salary-mark:$3000,billy:$50000,\n                        │
//! │ ...                                                      │
//! └──────────────────────────────────────────────────────────┘
//!   entry '-' (field ':' value ',')* '\n'
//! ```
//!
//! - No header, no version marker, no escaping
//! - Entry lines keep the position they were first written at; fields keep
//!   their position within the line
//! - Every write re-reads and rewrites the whole file (O(file size)), which
//!   suits small configuration-scale data
//!
//! Delimiters are configurable; the defaults are shown above.

pub mod codec;
mod backend;

pub use backend::LineFileBackend;

use crate::cached::CachedStore;
use crate::config::Config;

/// Cached store over a line-encoded file
pub type LineFileStore = CachedStore<LineFileBackend>;

impl CachedStore<LineFileBackend> {
    /// Open the line-encoded store `name` under the configured data directory
    pub fn line_file(name: &str, config: &Config) -> Self {
        CachedStore::new(LineFileBackend::open(name, config), config.delimiters)
    }
}
