//! Line codec
//!
//! Pure encode/decode functions for the line format. Nothing here touches
//! the filesystem; the backend reads lines, calls into this module, and
//! writes the result back.

use crate::error::{Result, StoreError};
use crate::keysafe::Delimiters;

/// A decoded record: entry name and its fields in line order
pub type DecodedEntry = (String, Vec<(String, String)>);

/// Split a line into entry name and field blob
///
/// Returns `None` unless the line holds exactly one entry delimiter.
pub fn split_line<'a>(line: &'a str, delimiters: &Delimiters) -> Option<(&'a str, &'a str)> {
    let (entry, blob) = line.split_once(delimiters.entry())?;
    if blob.contains(delimiters.entry()) {
        return None;
    }
    Some((entry, blob))
}

/// Iterate the field/value pairs of a field blob in order
///
/// Stops at the first piece that is not exactly `field<assign>value`, which
/// includes the empty piece after the trailing pair delimiter.
pub fn pairs<'a>(
    blob: &'a str,
    delimiters: &Delimiters,
) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
    let assign = delimiters.assign();
    blob.split(delimiters.pair()).map_while(move |piece| {
        let (field, value) = piece.split_once(assign)?;
        if value.contains(assign) {
            return None;
        }
        Some((field, value))
    })
}

/// Encode one line from an entry name and its pairs
///
/// Every pair, including the last, is followed by the pair delimiter.
pub fn encode_line<'a, I>(entry: &str, fields: I, delimiters: &Delimiters) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut line = String::with_capacity(entry.len() + 16);
    line.push_str(entry);
    line.push(delimiters.entry());
    for (field, value) in fields {
        line.push_str(field);
        line.push(delimiters.assign());
        line.push_str(value);
        line.push(delimiters.pair());
    }
    line
}

/// Find the value of `field` in `entry` by scanning lines top to bottom
///
/// A malformed line ends the scan as if the file ended there. The first line
/// naming `entry` is the only one consulted: if it lacks the field the
/// lookup fails with `FieldNotFound` without looking further.
pub fn lookup<'a, I>(lines: I, delimiters: &Delimiters, entry: &str, field: &str) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    for line in lines {
        let Some((name, blob)) = split_line(line, delimiters) else {
            break;
        };

        if name == entry {
            return pairs(blob, delimiters)
                .find(|(f, _)| *f == field)
                .map(|(_, value)| value.to_string())
                .ok_or_else(|| StoreError::FieldNotFound {
                    entry: entry.to_string(),
                    field: field.to_string(),
                });
        }
    }

    Err(StoreError::EntryNotFound {
        entry: entry.to_string(),
    })
}

/// Decode every readable line, stopping at the first malformed one
pub fn decode<'a, I>(lines: I, delimiters: &Delimiters) -> Vec<DecodedEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map_while(|line| split_line(line, delimiters))
        .map(|(name, blob)| {
            let fields = pairs(blob, delimiters)
                .map(|(f, v)| (f.to_string(), v.to_string()))
                .collect();
            (name.to_string(), fields)
        })
        .collect()
}

/// Produce the file's new lines after setting `entry.field = value`
///
/// - The first line naming `entry` is rebuilt in place: an existing `field`
///   has its value substituted where it stands, a new one is appended.
/// - With no such line, a single-pair line is added at the end of the
///   readable region.
/// - Untouched lines keep their relative order. A malformed line and all
///   lines after it are carried through verbatim after the readable region.
pub fn rewrite<S: AsRef<str>>(
    lines: &[S],
    delimiters: &Delimiters,
    entry: &str,
    field: &str,
    value: &str,
) -> Vec<String> {
    let readable = lines
        .iter()
        .position(|line| split_line(line.as_ref(), delimiters).is_none())
        .unwrap_or(lines.len());
    let (window, tail) = lines.split_at(readable);

    let target = window.iter().enumerate().find_map(|(i, line)| {
        split_line(line.as_ref(), delimiters)
            .filter(|(name, _)| *name == entry)
            .map(|(_, blob)| (i, blob))
    });

    let mut out: Vec<String> = Vec::with_capacity(lines.len() + 1);
    match target {
        Some((index, blob)) => {
            out.extend(window[..index].iter().map(|l| l.as_ref().to_string()));
            out.push(update_line(entry, blob, delimiters, field, value));
            out.extend(window[index + 1..].iter().map(|l| l.as_ref().to_string()));
        }
        None => {
            out.extend(window.iter().map(|l| l.as_ref().to_string()));
            out.push(encode_line(entry, [(field, value)], delimiters));
        }
    }
    out.extend(tail.iter().map(|l| l.as_ref().to_string()));
    out
}

/// Rebuild an entry line with one field set
fn update_line(entry: &str, blob: &str, delimiters: &Delimiters, field: &str, value: &str) -> String {
    let mut present = false;
    let mut fields: Vec<(&str, &str)> = pairs(blob, delimiters)
        .map(|(f, v)| {
            if f == field {
                present = true;
                (f, value)
            } else {
                (f, v)
            }
        })
        .collect();

    if !present {
        fields.push((field, value));
    }

    encode_line(entry, fields, delimiters)
}
