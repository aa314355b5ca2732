//! Shared types and logic for the Zorro utilities.
//!
//! - `names`: lazily loaded ID database (`/etc/zorro.ids`) and name resolution
//! - `filter`: slot and ID filter grammars plus the match predicate
//! - `device`: device identity tuple and board description from the bus
//! - `config`: optional TOML configuration with defaults for all paths

pub mod config;
pub mod device;
pub mod error;
pub mod filter;
pub mod names;

pub use config::ZorroConfig;
pub use device::{BoardType, DeviceId, ZorroId};
pub use error::{FilterError, NameDbError, ScanError, ZorroError};
pub use filter::DeviceFilter;
pub use names::NameDatabase;

/// Version reported by `--version`.
pub const ZORROUTILS_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default location of the bus pseudo-filesystem.
pub const PROC_BUS_ZORRO: &str = "/proc/bus/zorro";

/// Default location of the ID database.
pub const ETC_ZORRO_IDS: &str = "/etc/zorro.ids";
