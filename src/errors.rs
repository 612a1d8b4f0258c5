/*!
 * Error types for the fixstart application.
 *
 * This module contains custom error types for the exercise file handling,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving an exercise file
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The exercise file does not exist
    #[error("Exercise file not found: {path:?}")]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The exercise file exists but could not be read
    #[error("Failed to read exercise file {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid JSON
    #[error("Invalid JSON in {path:?}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but neither an exercise object nor a list of them
    #[error("Unsupported document shape in {path:?}: expected an object or an array")]
    UnsupportedShape {
        path: PathBuf,
    },

    /// The updated document could not be serialized
    #[error("Failed to render exercises for {path:?}: {source}")]
    Unrenderable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The updated document could not be written back
    #[error("Failed to write exercise file {path:?}: {source}")]
    Unwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocumentError {
    /// Whether the error happened before the document was modified in memory
    pub fn is_load_error(&self) -> bool {
        !matches!(self, Self::Unrenderable { .. } | Self::Unwritable { .. })
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from loading or saving the exercise document
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
