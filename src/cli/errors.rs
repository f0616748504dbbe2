//! CLI-specific error types
//!
//! Every CLI error is fatal: it is printed to stderr and the process exits.

use std::fmt;
use std::io;

use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Invalid or missing configuration
    ConfigError,
    /// Could not connect to the store, start the runtime, or bind
    BootFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "FRUIT_CLI_CONFIG_ERROR",
            Self::BootFailed => "FRUIT_CLI_BOOT_FAILED",
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
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

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
        Self::boot_failed(e.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UnsupportedUri(_) => Self::config_error(e.to_string()),
            other => Self::boot_failed(format!("Failed to connect to store: {}", other)),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::boot_failed("no store");
        assert_eq!(err.to_string(), "FRUIT_CLI_BOOT_FAILED: no store");
        assert_eq!(err.message(), "no store");
    }

    #[test]
    fn test_store_errors_map_to_codes() {
        let err = CliError::from(StoreError::UnsupportedUri("mongodb://x".to_string()));
        assert_eq!(err.code(), &CliErrorCode::ConfigError);

        let err = CliError::from(StoreError::Io {
            path: "fruits.json".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        });
        assert_eq!(err.code(), &CliErrorCode::BootFailed);
        assert!(err.message().starts_with("Failed to connect to store"));
    }
}
