//! Parser for the `zorro.ids` text format.
//!
//! ```text
//! # comment
//! 07e1  Great Valley Products
//!     0b30  G-Force 040 SCSI
//!     0b40  A1291 SCSI
//! ```
//!
//! A key at column 0 opens a vendor; an indented key is a device of the
//! last vendor, keyed by `(product << 8) | extended_product`.

use crate::error::{NameListError, NameListErrorReason};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Owner of an index entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Vendor,
    Manufacturer(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameKey {
    pub scope: Scope,
    pub id: u16,
}

impl NameKey {
    pub fn vendor(manufacturer: u16) -> Self {
        Self {
            scope: Scope::Vendor,
            id: manufacturer,
        }
    }

    pub fn device(manufacturer: u16, product: u8, extended_product: u8) -> Self {
        Self {
            scope: Scope::Manufacturer(manufacturer),
            id: ((product as u16) << 8) | extended_product as u16,
        }
    }
}

/// Parsed ID database. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    entries: HashMap<NameKey, String>,
}

impl NameIndex {
    pub fn vendor(&self, manufacturer: u16) -> Option<&str> {
        self.get(NameKey::vendor(manufacturer))
    }

    pub fn device(&self, manufacturer: u16, product: u8, extended_product: u8) -> Option<&str> {
        self.get(NameKey::device(manufacturer, product, extended_product))
    }

    pub fn get(&self, key: NameKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of vendor records.
    pub fn vendor_count(&self) -> usize {
        self.entries
            .keys()
            .filter(|k| k.scope == Scope::Vendor)
            .count()
    }
}

/// Parse the whole database text. Fails on the first bad or duplicate line.
pub fn parse_name_list(text: &str) -> Result<NameIndex, NameListError> {
    let mut entries = HashMap::new();
    let mut current_vendor: Option<u16> = None;

    for (line_idx, raw) in text.split('\n').enumerate() {
        let line_num = line_idx + 1;

        let line = strip_line(raw);
        if line.is_empty() {
            continue;
        }

        let (indented, key, name) = split_record(&line)
            .ok_or(NameListError::new(line_num, NameListErrorReason::Malformed))?;

        let key = if indented {
            let vendor = current_vendor
                .ok_or(NameListError::new(line_num, NameListErrorReason::NoVendor))?;
            NameKey {
                scope: Scope::Manufacturer(vendor),
                id: key,
            }
        } else {
            current_vendor = Some(key);
            NameKey::vendor(key)
        };

        match entries.entry(key) {
            Entry::Occupied(_) => {
                return Err(NameListError::new(line_num, NameListErrorReason::Duplicate))
            }
            Entry::Vacant(slot) => {
                slot.insert(name.to_string());
            }
        }
    }

    Ok(NameIndex { entries })
}

/// Drop the comment, turn tabs into spaces and trim trailing spaces.
fn strip_line(raw: &str) -> String {
    let content = raw.split('#').next().unwrap_or_default();
    let mut line = content.replace('\t', " ");
    let trimmed_len = line.trim_end_matches(' ').len();
    line.truncate(trimmed_len);
    line
}

/// Split `[indent]XXXX <name>` into (indented, key, name).
fn split_record(line: &str) -> Option<(bool, u16, &str)> {
    let rest = line.trim_start_matches(' ');
    let indented = rest.len() != line.len();

    let bytes = rest.as_bytes();
    if bytes.len() < 5 || bytes[4] != b' ' || !bytes[..4].iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let key = u16::from_str_radix(&rest[..4], 16).ok()?;
    let name = rest[5..].trim_start_matches(' ');
    if name.is_empty() {
        return None;
    }
    Some((indented, key, name))
}
