//! CLI-specific error types
//!
//! All CLI errors are fatal: the process prints `CODE: message` and exits 1.

use std::fmt;
use std::io;

use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout, runtime, socket)
    IoError,
    /// Data file could not be loaded
    LoadError,
    /// Requested customer does not exist
    NotFound,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "CUSTDB_CLI_CONFIG_ERROR",
            Self::IoError => "CUSTDB_CLI_IO_ERROR",
            Self::LoadError => "CUSTDB_CLI_LOAD_ERROR",
            Self::NotFound => "CUSTDB_CLI_NOT_FOUND",
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

    /// Customer not found
    pub fn not_found() -> Self {
        Self::new(CliErrorCode::NotFound, "Customer not found")
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
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
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
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        Self::new(CliErrorCode::LoadError, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::not_found();
        assert_eq!(err.to_string(), "CUSTDB_CLI_NOT_FOUND: Customer not found");
        assert_eq!(err.code(), &CliErrorCode::NotFound);
    }

    #[test]
    fn test_store_error_maps_to_load_error() {
        let store_err = StoreError::Io {
            path: "missing.json".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let err = CliError::from(store_err);
        assert_eq!(err.code_str(), "CUSTDB_CLI_LOAD_ERROR");
        assert!(err.message().contains("missing.json"));
    }
}
