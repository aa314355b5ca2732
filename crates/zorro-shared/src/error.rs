//! Error types for the Zorro utilities.

use std::path::PathBuf;
use thiserror::Error;

/// Rejected filter text. Messages are shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Invalid slot number")]
    InvalidSlot,

    #[error("':' expected")]
    MissingColon,

    #[error("Invalid manufacturer ID")]
    InvalidManufacturer,

    #[error("Invalid product ID")]
    InvalidProduct,

    #[error("Invalid extended product ID")]
    InvalidExtendedProduct,
}

/// Why a line of the ID database was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameListErrorReason {
    /// Line does not match `[indent]XXXX <name>`
    #[error("parse error")]
    Malformed,
    /// Indented device record with no vendor record above it
    #[error("parse error")]
    NoVendor,
    /// `(scope, id)` pair already present
    #[error("duplicate entry")]
    Duplicate,
}

/// Line-numbered failure while parsing the ID database text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line_num}: {reason}")]
pub struct NameListError {
    /// 1-indexed line number
    pub line_num: usize,
    pub reason: NameListErrorReason,
}

impl NameListError {
    pub fn new(line_num: usize, reason: NameListErrorReason) -> Self {
        Self { line_num, reason }
    }

    pub fn is_duplicate(&self) -> bool {
        self.reason == NameListErrorReason::Duplicate
    }
}

/// Fatal ID database failure. A missing file is not an error (numeric fallback).
#[derive(Error, Debug)]
pub enum NameDbError {
    #[error("{}: read: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}, {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: NameListError,
    },
}

/// Failure while reading the bus pseudo-filesystem.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("{}: {source}", .path.display())]
    DeviceList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}, line {line_num}: malformed device entry", .path.display())]
    MalformedDevice { path: PathBuf, line_num: usize },

    #[error("Unable to open {}: {source}", .path.display())]
    ConfigOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Only {got} bytes of config space available to you")]
    ShortConfig { got: usize },
}

/// Failure loading the zorroutils config file.
#[derive(Error, Debug)]
pub enum ZorroError {
    #[error("Failed to read {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
