//! ID to name translation.
//!
//! The database is read at most once, on the first query. A database that
//! cannot be opened switches the resolver to numeric output; one that opens
//! but cannot be read or parsed is a fatal error.

pub mod parser;

pub use parser::{parse_name_list, NameIndex, NameKey, Scope};

use crate::error::NameDbError;
use crate::ETC_ZORRO_IDS;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of the one-time load.
#[derive(Debug)]
enum LoadState {
    Loaded(NameIndex),
    /// Database could not be opened; numeric output from now on
    Unavailable,
}

/// Resolves manufacturer and product IDs to display names.
#[derive(Debug)]
pub struct NameDatabase {
    path: PathBuf,
    numeric: bool,
    state: OnceCell<LoadState>,
}

impl Default for NameDatabase {
    fn default() -> Self {
        Self::new(ETC_ZORRO_IDS)
    }
}

impl NameDatabase {
    /// Resolver backed by the database at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            numeric: false,
            state: OnceCell::new(),
        }
    }

    /// Resolver over an already parsed index.
    pub fn from_index(index: NameIndex) -> Self {
        Self {
            path: PathBuf::new(),
            numeric: false,
            state: OnceCell::with_value(LoadState::Loaded(index)),
        }
    }

    /// Force numeric output. The database is then never read.
    pub fn force_numeric(&mut self) {
        self.numeric = true;
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Numeric output is in effect, forced or after a failed open.
    pub fn is_numeric(&self) -> bool {
        self.numeric || matches!(self.state.get(), Some(LoadState::Unavailable))
    }

    /// Load the database if that has not happened yet.
    ///
    /// Returns the index, or `None` when output is numeric.
    pub fn ensure_loaded(&self) -> Result<Option<&NameIndex>, NameDbError> {
        if self.numeric {
            return Ok(None);
        }
        let state = self.state.get_or_try_init(|| self.load())?;
        match state {
            LoadState::Loaded(index) => Ok(Some(index)),
            LoadState::Unavailable => Ok(None),
        }
    }

    fn load(&self) -> Result<LoadState, NameDbError> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                debug!(
                    path = %self.path.display(),
                    error = %e,
                    "ID database unavailable, using numeric IDs"
                );
                return Ok(LoadState::Unavailable);
            }
        };

        let mut raw = Vec::new();
        file.read_to_end(&mut raw).map_err(|source| NameDbError::Read {
            path: self.path.clone(),
            source,
        })?;

        let text = String::from_utf8_lossy(&raw);
        let index = parse_name_list(&text).map_err(|source| NameDbError::Parse {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            path = %self.path.display(),
            entries = index.len(),
            vendors = index.vendor_count(),
            "loaded ID database"
        );
        Ok(LoadState::Loaded(index))
    }

    /// Vendor name, or `MMMM`.
    pub fn resolve_vendor(&self, manufacturer: u16) -> Result<String, NameDbError> {
        let name = self
            .ensure_loaded()?
            .and_then(|index| index.vendor(manufacturer));
        Ok(match name {
            Some(name) => name.to_string(),
            None => format!("{:04x}", manufacturer),
        })
    }

    /// Device name, or `PP:EE`.
    pub fn resolve_device(
        &self,
        manufacturer: u16,
        product: u8,
        extended_product: u8,
    ) -> Result<String, NameDbError> {
        let name = self
            .ensure_loaded()?
            .and_then(|index| index.device(manufacturer, product, extended_product));
        Ok(match name {
            Some(name) => name.to_string(),
            None => format!("{:02x}:{:02x}", product, extended_product),
        })
    }

    /// One-line description of a device.
    ///
    /// - `"<vendor> <device>"` when both are known
    /// - `"<vendor>: Unknown device PP:EE"` when only the vendor is known
    /// - `"Unknown device MMMM:PP:EE"` when the vendor is unknown
    /// - `"MMMM:PP:EE"` in numeric mode
    pub fn resolve_full(
        &self,
        manufacturer: u16,
        product: u8,
        extended_product: u8,
    ) -> Result<String, NameDbError> {
        let Some(index) = self.ensure_loaded()? else {
            return Ok(format!(
                "{:04x}:{:02x}:{:02x}",
                manufacturer, product, extended_product
            ));
        };

        let vendor = index.vendor(manufacturer);
        let device = index.device(manufacturer, product, extended_product);
        Ok(match (vendor, device) {
            (None, _) => format!(
                "Unknown device {:04x}:{:02x}:{:02x}",
                manufacturer, product, extended_product
            ),
            (Some(vendor), None) => format!(
                "{}: Unknown device {:02x}:{:02x}",
                vendor, product, extended_product
            ),
            (Some(vendor), Some(device)) => format!("{} {}", vendor, device),
        })
    }
}
