//! Configuration management
//!
//! This module handles loading and managing configuration from:
//! - Command-line arguments
//! - Configuration files (TOML)
//! - Defaults

use crate::error::{Error, Result};
use crate::render::RenderFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub table: TableConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Graphviz rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output format used by `visualize` when `--format` is not given
    #[serde(default)]
    pub format: RenderFormat,

    /// Graphviz layout binary
    #[serde(default = "default_dot_binary")]
    pub dot_binary: String,

    /// Open the rendered file after writing it
    #[serde(default)]
    pub view: bool,
}

/// Table reading configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Reject tables whose first record is not `SOURCE,DEST,TRIGGER`
    #[serde(default = "default_require_header")]
    pub require_header: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions

fn default_dot_binary() -> String {
    "dot".to_string()
}

fn default_require_header() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

// Default implementations

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: RenderFormat::default(),
            dot_binary: default_dot_binary(),
            view: false,
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            require_header: default_require_header(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config file {:?}: {}", path, e)))?;

        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// Searches in order:
    /// 1. ./sttp.toml
    /// 2. ~/.sttp/config.toml
    /// 3. /etc/sttp/config.toml
    pub fn load() -> Result<Self> {
        for path in Self::search_paths() {
            if path.exists() {
                tracing::info!("Loading config from {:?}", path);
                return Self::from_file(path);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Config::default())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("sttp.toml")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".sttp").join("config.toml"));
        }
        paths.push(PathBuf::from("/etc/sttp/config.toml"));
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.render.format, RenderFormat::Pdf);
        assert_eq!(config.render.dot_binary, "dot");
        assert!(!config.render.view);
        assert!(config.table.require_header);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_parse_toml_config() {
        let toml = r#"
[render]
format = "svg"
view = true

[table]
require_header = false

[logging]
level = "debug"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.render.format, RenderFormat::Svg);
        assert_eq!(config.render.dot_binary, "dot");
        assert!(config.render.view);
        assert!(!config.table.require_header);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\ndot_binary = \"/usr/local/bin/dot\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.render.dot_binary, "/usr/local/bin/dot");
        assert_eq!(config.render.format, RenderFormat::Pdf);
    }

    #[test]
    fn test_from_file_rejects_unknown_format() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\nformat = \"docx\"").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_missing_file() {
        let err = Config::from_file("/nonexistent/sttp.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
