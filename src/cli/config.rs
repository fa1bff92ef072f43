//! Settings file for rbf-props
//!
//! Optional JSON file passed with `--config`. Every key has a default, so an
//! empty object `{}` is a valid settings file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::observability::{LogFormat, Severity};
use crate::store::{LoadOptions, SaveOptions};

/// Settings file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Log level when RBF_PROPS_LOG is unset (default "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// "text" or "json" (default "text")
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Re-indent documents on save
    #[serde(default)]
    pub indent: bool,

    /// Emit the XML declaration on save
    #[serde(default = "default_true")]
    pub write_declaration: bool,

    /// Keep XML comments through load and save
    #[serde(default = "default_true")]
    pub keep_comments: bool,

    /// Save through a temp file + rename
    #[serde(default)]
    pub atomic_write: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}
fn default_log_format() -> String {
    "text".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            indent: false,
            write_declaration: true,
            keep_comments: true,
            atomic_write: false,
        }
    }
}

impl Config {
    /// Load settings from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        self.log_level
            .parse::<Severity>()
            .map_err(|e| CliError::config_error(format!("Invalid log_level: {}", e)))?;

        self.log_format
            .parse::<LogFormat>()
            .map_err(|e| CliError::config_error(format!("Invalid log_format: {}", e)))?;

        Ok(())
    }

    /// Configured log level, `warn` if unparseable
    pub fn severity(&self) -> Severity {
        self.log_level.parse().unwrap_or(Severity::Warn)
    }

    /// Configured log format, `text` if unparseable
    pub fn log_format(&self) -> LogFormat {
        self.log_format.parse().unwrap_or(LogFormat::Text)
    }

    pub fn save_options(&self) -> SaveOptions {
        SaveOptions {
            indent: self.indent,
            write_declaration: self.write_declaration,
            atomic: self.atomic_write,
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        self.save_options().load_options(self.keep_comments)
    }
}
