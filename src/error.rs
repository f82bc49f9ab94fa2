//! Error types for the PATH editor
//!
//! Every action in [`crate::session::Session`] turns these into a dialog, so
//! the `Display` text is what the user reads.

use std::io;
use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum PathEditorError {
    /// Opening, reading or writing a registry key was refused by the OS
    #[error("Failed to {action} registry key {key}: {source}")]
    RegistryAccess {
        action: &'static str,
        key: &'static str,
        #[source]
        source: io::Error,
    },

    /// A backup document is incomplete or malformed
    #[error("{0}")]
    InvalidBackup(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The tracing subscriber could not be installed
    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

/// How a failure is presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Key open/read/write denied
    Access,
    /// Malformed or incomplete backup document
    Validation,
    /// Anything else (file IO, logging)
    Internal,
}

impl PathEditorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RegistryAccess { .. } => ErrorCategory::Access,
            Self::InvalidBackup(_) | Self::Json(_) => ErrorCategory::Validation,
            Self::Io(_) | Self::Logging(_) => ErrorCategory::Internal,
        }
    }
}

/// Result type alias for PATH editor operations
pub type Result<T> = std::result::Result<T, PathEditorError>;
