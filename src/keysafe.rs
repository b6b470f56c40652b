//! Key-safe values
//!
//! The line-encoded file format has no escaping, so the only protection is
//! refusing to write any string that contains one of its three delimiters.
//! Validation happens on every write and never on read. Line breaks are
//! refused as well, since they separate records.

use crate::error::{Result, StoreError};

/// The three reserved characters of the line encoding
///
/// ```text
/// entry<entry>field1<assign>value1<pair>field2<assign>value2<pair>
/// ```
///
/// Only [`Delimiters::new`] and `Default` construct one, so every set in use
/// is distinct and free of line breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    /// Separates the entry name from its field blob (default `-`)
    entry: char,

    /// Terminates each field/value pair (default `,`)
    pair: char,

    /// Separates a field name from its value (default `:`)
    assign: char,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            entry: '-',
            pair: ',',
            assign: ':',
        }
    }
}

impl Delimiters {
    /// Build a delimiter set, rejecting ambiguous choices
    ///
    /// The three characters must be distinct and none may be a line break,
    /// since records are newline-separated.
    pub fn new(entry: char, pair: char, assign: char) -> Result<Self> {
        if entry == pair || entry == assign || pair == assign {
            return Err(StoreError::Config(format!(
                "delimiters must be distinct, got {entry:?} {pair:?} {assign:?}"
            )));
        }
        for c in [entry, pair, assign] {
            if c == '\n' || c == '\r' {
                return Err(StoreError::Config(
                    "a line break cannot be used as a delimiter".to_string(),
                ));
            }
        }
        Ok(Self { entry, pair, assign })
    }

    /// Separator between entry name and field blob
    pub fn entry(&self) -> char {
        self.entry
    }

    /// Terminator after each field/value pair
    pub fn pair(&self) -> char {
        self.pair
    }

    /// Separator between field name and value
    pub fn assign(&self) -> char {
        self.assign
    }

    /// All reserved characters, in encoding order
    pub fn reserved(&self) -> [char; 3] {
        [self.entry, self.pair, self.assign]
    }

    /// Check whether a character is reserved
    pub fn is_reserved(&self, c: char) -> bool {
        c == self.entry || c == self.pair || c == self.assign
    }

    /// Fail with `InvalidField` on the first reserved character found
    pub fn validate(&self, strings: &[&str]) -> Result<()> {
        for s in strings {
            let unsafe_char = s
                .chars()
                .find(|c| self.is_reserved(*c) || *c == '\n' || *c == '\r');
            if let Some(delimiter) = unsafe_char {
                return Err(StoreError::InvalidField {
                    value: (*s).to_string(),
                    delimiter,
                });
            }
        }
        Ok(())
    }
}
