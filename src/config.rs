//! Configuration file support
//!
//! Defaults for the command line are read from
//! `<config dir>/book-paginator/config.toml`:
//!
//! ```toml
//! [pagination]
//! kind = "roman"
//! mode = "double_pages"
//! separator = " - "
//! fictitious = false
//! count = 20
//! ```
//!
//! Command-line arguments take precedence over the file.

use crate::pagination::{PaginatorMode, PaginatorType};
use crate::request::{PaginationRequest, DEFAULT_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory name below the platform config directory
const CONFIG_DIR_NAME: &str = "book-paginator";

/// Config file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Labels generated when neither file nor CLI say otherwise
pub const DEFAULT_COUNT: usize = 10;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Pagination defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationDefaults {
    pub kind: PaginatorType,
    pub mode: PaginatorMode,
    pub separator: String,
    pub fictitious: bool,
    pub count: usize,
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        Self {
            kind: PaginatorType::default(),
            mode: PaginatorMode::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
            fictitious: false,
            count: DEFAULT_COUNT,
        }
    }
}

impl PaginationDefaults {
    /// Turn the defaults into a request for `value`
    pub fn request(&self, value: impl Into<String>) -> PaginationRequest {
        PaginationRequest::builder(value)
            .kind(self.kind)
            .mode(self.mode)
            .fictitious(self.fictitious)
            .separator(self.separator.clone())
            .count(self.count)
            .build()
    }
}

/// Values given on the command line; `None` keeps the config value
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub kind: Option<PaginatorType>,
    pub mode: Option<PaginatorMode>,
    pub separator: Option<String>,
    pub fictitious: Option<bool>,
    pub count: Option<usize>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pagination: PaginationDefaults,
}

impl Config {
    /// Default config file location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the default config file; a missing file yields the defaults
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load a config file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Merge with command-line values, the command line winning
    pub fn merge_with_cli(&self, overrides: &CliOverrides) -> PaginationDefaults {
        let defaults = &self.pagination;
        PaginationDefaults {
            kind: overrides.kind.unwrap_or(defaults.kind),
            mode: overrides.mode.unwrap_or(defaults.mode),
            separator: overrides
                .separator
                .clone()
                .unwrap_or_else(|| defaults.separator.clone()),
            fictitious: overrides.fictitious.unwrap_or(defaults.fictitious),
            count: overrides.count.unwrap_or(defaults.count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.pagination.kind, PaginatorType::Arabic);
        assert_eq!(config.pagination.mode, PaginatorMode::Pages);
        assert_eq!(config.pagination.separator, " ");
        assert_eq!(config.pagination.count, DEFAULT_COUNT);
    }

    #[test]
    fn test_config_from_toml() {
        let config = Config::from_toml(
            r#"
[pagination]
kind = "roman"
mode = "double_pages"
count = 4
"#,
        )
        .unwrap();
        assert_eq!(config.pagination.kind, PaginatorType::Roman);
        assert_eq!(config.pagination.mode, PaginatorMode::DoublePages);
        assert_eq!(config.pagination.count, 4);
        // Unset keys keep their defaults
        assert_eq!(config.pagination.separator, " ");
        assert!(!config.pagination.fictitious);
    }

    #[test]
    fn test_config_empty_toml() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_config_invalid_toml() {
        assert!(matches!(
            Config::from_toml("[pagination]\nmode = \"sideways\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_config_toml_round_trip() {
        let mut config = Config::default();
        config.pagination.mode = PaginatorMode::Rectoverso;
        let text = config.to_toml().unwrap();
        assert!(text.contains("mode = \"rectoverso\""));
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[pagination]\nfictitious = true").unwrap();
        let config = Config::load_from_path(file.path()).unwrap();
        assert!(config.pagination.fictitious);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load_from_path(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_merge_with_cli() {
        let config = Config::from_toml("[pagination]\nkind = \"roman\"\ncount = 4").unwrap();

        let merged = config.merge_with_cli(&CliOverrides::new());
        assert_eq!(merged.kind, PaginatorType::Roman);
        assert_eq!(merged.count, 4);

        let overrides = CliOverrides {
            count: Some(2),
            mode: Some(PaginatorMode::Foliation),
            ..CliOverrides::new()
        };
        let merged = config.merge_with_cli(&overrides);
        assert_eq!(merged.kind, PaginatorType::Roman);
        assert_eq!(merged.mode, PaginatorMode::Foliation);
        assert_eq!(merged.count, 2);
    }

    #[test]
    fn test_defaults_to_request() {
        let defaults = PaginationDefaults {
            kind: PaginatorType::Roman,
            count: 3,
            ..PaginationDefaults::default()
        };
        let request = defaults.request("1");
        assert_eq!(request.labels().unwrap(), ["I", "II", "III"]);
    }
}
