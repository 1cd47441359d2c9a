//! Error types for sql-page-token
//!
//! All fallible APIs return `Result<T, Error>` where Error is defined here.
//! Only page construction and configuration loading can fail; accessors and
//! the next-token decision are total over a validated page.

use std::num::ParseIntError;
use thiserror::Error;

/// The main error type for sql-page-token
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Page Errors
    // ============================================================================
    #[error("Invalid page token '{token}': {source}")]
    InvalidToken {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{message}")]
    Validation { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfig { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a token parse error
    pub fn invalid_token(token: impl Into<String>, source: ParseIntError) -> Self {
        Self::InvalidToken {
            token: token.into(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The token was not an integer literal
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::InvalidToken { .. })
    }

    /// The page number or page size was out of range
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}

/// Result type alias for sql-page-token
pub type Result<T> = std::result::Result<T, Error>;
