//! Error types for packaging operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while packaging a plugin.
#[derive(Debug, Error)]
pub enum PackError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// ZIP archive error.
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// No plugin descriptor in the plugin directory.
    #[error("No .uplugin file was found in: {}", .0.display())]
    DescriptorNotFound(PathBuf),

    /// The descriptor is valid JSON but not a descriptor.
    #[error("Invalid plugin descriptor: {0}")]
    InvalidDescriptor(String),

    /// A field the rewrite rules depend on is missing.
    #[error("Missing descriptor field: {0}")]
    MissingField(&'static str),
}
