//! Centralized error handling for the Argo profile explorer
//!
//! Sentinel-driven absences (fill-valued times, coordinates or samples) are
//! never errors: they are resolved into `None` at the decode boundary. The
//! variants here cover structural problems with the source files and the
//! terminal "no data" condition.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for explorer operations
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// NetCDF library errors (open, read, unsupported conversions)
    #[error("NetCDF error: {0}")]
    NetCDFError(#[from] netcdf::Error),

    /// I/O operation errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Array shape errors while assembling measurement blocks
    #[error("Array error: {0}")]
    ArrayError(#[from] ndarray::ShapeError),

    /// JSON export errors
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid file discovery pattern
    #[error("Invalid file pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    /// Configured data directory does not exist or is not a directory
    #[error("Data directory '{}' not found", .path.display())]
    DataDirNotFound { path: PathBuf },

    /// A source file lacks an expected dimension or variable, or has the wrong shape
    #[error("Malformed profile file '{source_name}': {reason}")]
    MalformedSource { source_name: String, reason: String },

    /// A byte in a character array is not valid UTF-8 on its own
    #[error("Invalid character byte 0x{byte:02x} at position {position}")]
    InvalidCharacter { byte: u8, position: usize },

    /// The load produced zero usable profiles
    #[error("No valid profiles found in your NetCDF files.")]
    EmptyResultSet,

    /// A date argument could not be parsed or the range is inverted
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl ExplorerError {
    /// Build a [`ExplorerError::MalformedSource`] for the named source.
    pub fn malformed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        ExplorerError::MalformedSource {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error describes a structurally broken source file.
    pub fn is_malformed_source(&self) -> bool {
        matches!(
            self,
            ExplorerError::MalformedSource { .. } | ExplorerError::NetCDFError(_)
        )
    }
}

/// Result type alias for explorer operations
pub type Result<T> = std::result::Result<T, ExplorerError>;
