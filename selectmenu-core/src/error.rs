//! Structured error types for selectmenu-core.
//!
//! Only loading options and configuration can fail. Navigation and layout
//! never return errors: a menu that cannot act on a key simply does nothing.
//! The `selectmenu` binary wraps these in `anyhow` for context.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for selectmenu-core operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// TOML document could not be parsed
    #[error("TOML error in {path:?}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// JSON document could not be parsed
    #[error("JSON error in {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// File extension does not name a supported options format
    #[error("Invalid format in file {path:?}: {reason}")]
    InvalidFormat { path: PathBuf, reason: String },

    /// An options file parsed but contained no options
    #[error("No options found in {path:?}")]
    EmptyOptions { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for selectmenu-core operations
pub type Result<T> = std::result::Result<T, MenuError>;

impl MenuError {
    /// Create a TOML error for a file
    pub fn toml(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Toml {
            path: path.into(),
            source,
        }
    }

    /// Create a JSON error for a file
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an empty options error
    pub fn empty_options(path: impl Into<PathBuf>) -> Self {
        Self::EmptyOptions { path: path.into() }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
