//! CLI-specific error types
//!
//! All CLI errors are fatal: the process reports them and exits 1.

use std::fmt;
use std::io;

use crate::reshape::ReshapeError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Bad command-line arguments
    Usage,
    /// Configuration file error
    ConfigError,
    /// I/O error (input read, output write)
    IoError,
    /// Input could not be reshaped
    ReshapeFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usage => "BIBLESHAPE_CLI_USAGE",
            Self::ConfigError => "BIBLESHAPE_CLI_CONFIG_ERROR",
            Self::IoError => "BIBLESHAPE_CLI_IO_ERROR",
            Self::ReshapeFailed => "BIBLESHAPE_CLI_RESHAPE_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
    reshape: Option<ReshapeError>,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            reshape: None,
        }
    }

    /// Usage error
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::Usage, msg)
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
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

    /// The underlying reshape error, if that is what failed
    pub fn reshape_error(&self) -> Option<&ReshapeError> {
        self.reshape.as_ref()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reshape {
            Some(e) => write!(f, "{}: {}: {}", self.code.code(), e.code(), self.message),
            None => write!(f, "{}: {}", self.code.code(), self.message),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.reshape
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

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

impl From<ReshapeError> for CliError {
    fn from(e: ReshapeError) -> Self {
        Self {
            code: CliErrorCode::ReshapeFailed,
            message: e.to_string(),
            reshape: Some(e),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
