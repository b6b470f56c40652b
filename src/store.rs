//! Store Facade
//!
//! The read/write contract every store exposes.
//!
//! Implementors supply the raw lookup and write (`read_field` /
//! `write_field`); the provided `get_data` / `set_data` methods put the
//! key-safe validation gate in front of every write.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::{Result, StoreError};
use crate::keysafe::Delimiters;

/// Two-level entry/field store
///
/// Only single-threaded use is assumed for the file-backed stores. Two
/// writers on the same backing file can lose updates.
pub trait DataStore {
    /// The reserved characters writes are checked against
    fn delimiters(&self) -> &Delimiters;

    /// Look up a field without any facade processing
    fn read_field(&self, entry: &str, field: &str) -> Result<String>;

    /// Store a field that has already passed validation
    fn write_field(&self, entry: &str, field: &str, value: &str) -> Result<()>;

    /// Get the value of `field` within `entry`
    fn get_data(&self, entry: &str, field: &str) -> Result<String> {
        self.read_field(entry, field)
    }

    /// Set `field` within `entry`, creating the entry if needed
    ///
    /// Fails with `InvalidField` if any argument contains a reserved
    /// character; nothing is written in that case.
    fn set_data(&self, entry: &str, field: &str, value: &str) -> Result<()> {
        self.delimiters().validate(&[entry, field, value])?;
        self.write_field(entry, field, value)
    }

    /// Store any displayable value as its string form
    fn set_value<T: Display>(&self, entry: &str, field: &str, value: T) -> Result<()>
    where
        Self: Sized,
    {
        self.set_data(entry, field, &value.to_string())
    }

    /// Read a field and parse it into `T`
    fn get_parsed<T>(&self, entry: &str, field: &str) -> Result<T>
    where
        Self: Sized,
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.get_data(entry, field)?;
        raw.parse().map_err(|e: T::Err| StoreError::Parse {
            entry: entry.to_string(),
            field: field.to_string(),
            reason: e.to_string(),
        })
    }
}
