//! Zorro utilities configuration.
//!
//! Config file: `$LSZORRO_CONFIG`, else `/etc/zorroutils.toml`.
//! Every field is optional; command-line flags override what is set here.

use crate::error::ZorroError;
use crate::{ETC_ZORRO_IDS, PROC_BUS_ZORRO};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "LSZORRO_CONFIG";

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/zorroutils.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZorroConfig {
    /// ID database
    pub ids_path: PathBuf,

    /// Bus pseudo-filesystem directory
    pub bus_dir: PathBuf,

    /// Always show numeric IDs
    pub numeric: bool,
}

impl Default for ZorroConfig {
    fn default() -> Self {
        Self {
            ids_path: PathBuf::from(ETC_ZORRO_IDS),
            bus_dir: PathBuf::from(PROC_BUS_ZORRO),
            numeric: false,
        }
    }
}

impl ZorroConfig {
    /// Config file to read, if any.
    ///
    /// An explicit `$LSZORRO_CONFIG` is used even if it does not exist, so a
    /// typo surfaces as an error instead of silently using defaults.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        let system = PathBuf::from(SYSTEM_CONFIG_PATH);
        system.exists().then_some(system)
    }

    /// Load the configuration, falling back to defaults when no file is present.
    pub fn load() -> Result<Self, ZorroError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ZorroError> {
        let contents = fs::read_to_string(path).map_err(|source| ZorroError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &contents)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self, ZorroError> {
        toml::from_str(contents).map_err(|source| ZorroError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ZorroConfig::default();
        assert_eq!(config.ids_path, PathBuf::from("/etc/zorro.ids"));
        assert_eq!(config.bus_dir, PathBuf::from("/proc/bus/zorro"));
        assert!(!config.numeric);
    }

    #[test]
    fn test_partial_toml() {
        let config = ZorroConfig::parse(Path::new("t.toml"), "numeric = true\n").unwrap();
        assert!(config.numeric);
        assert_eq!(config.ids_path, PathBuf::from("/etc/zorro.ids"));
    }

    #[test]
    fn test_full_toml() {
        let toml = r#"
ids_path = "/usr/share/misc/zorro.ids"
bus_dir = "/tmp/zorro"
numeric = false
"#;
        let config = ZorroConfig::parse(Path::new("t.toml"), toml).unwrap();
        assert_eq!(config.ids_path, PathBuf::from("/usr/share/misc/zorro.ids"));
        assert_eq!(config.bus_dir, PathBuf::from("/tmp/zorro"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = ZorroConfig::parse(Path::new("t.toml"), "numeric = \"yes\"").unwrap_err();
        assert!(matches!(err, ZorroError::ConfigParse { .. }));
        assert!(err.to_string().starts_with("Failed to parse t.toml"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = ZorroConfig::load_from(Path::new("/nonexistent/zorroutils.toml")).unwrap_err();
        assert!(matches!(err, ZorroError::ConfigRead { .. }));
    }
}
