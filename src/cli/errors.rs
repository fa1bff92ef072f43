//! CLI-specific error types
//!
//! All CLI errors are fatal: the message is printed with an `[E]` prefix and
//! the process exits with status 1.

use std::fmt;
use std::io;

use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Settings file error
    ConfigError,
    /// I/O error (stdout, property file reads and writes)
    IoError,
    /// Property file does not exist
    FileNotFound,
    /// Property file is not well-formed XML
    ParseError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "RBF_CLI_CONFIG_ERROR",
            Self::IoError => "RBF_CLI_IO_ERROR",
            Self::FileNotFound => "RBF_CLI_FILE_NOT_FOUND",
            Self::ParseError => "RBF_CLI_PARSE_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Missing property file
    pub fn file_not_found(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::FileNotFound, msg)
    }

    /// Malformed property file
    pub fn parse_error(path: impl fmt::Display) -> Self {
        Self::new(
            CliErrorCode::ParseError,
            format!("Error while parsing file {}", path),
        )
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[E] {}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::config_error(format!("Invalid config JSON: {}", e))
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(ref path) => {
                Self::file_not_found(format!("Config file {} does not exist", path.display()))
            }
            StoreError::Parse { path, .. } => Self::parse_error(path),
            StoreError::Io { .. } | StoreError::Serialize(_) => Self::io_error(e.to_string()),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_display_has_error_prefix() {
        let err = CliError::parse_error("/etc/hadoop/conf/hdfs-rbf-site.xml");
        assert_eq!(
            err.to_string(),
            "[E] Error while parsing file /etc/hadoop/conf/hdfs-rbf-site.xml"
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_store_errors_map_to_codes() {
        let not_found: CliError = StoreError::NotFound(PathBuf::from("a.xml")).into();
        assert_eq!(not_found.code(), &CliErrorCode::FileNotFound);

        let parse: CliError = StoreError::parse("a.xml", "unexpected end of stream").into();
        assert_eq!(parse.code(), &CliErrorCode::ParseError);
        assert_eq!(parse.message(), "Error while parsing file a.xml");

        let serialize: CliError = StoreError::Serialize("boom".to_string()).into();
        assert_eq!(serialize.code_str(), "RBF_CLI_IO_ERROR");
    }

    #[test]
    fn test_json_error_is_config_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let err: CliError = json_err.into();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
        assert!(err.message().starts_with("Invalid config JSON"));
    }
}
