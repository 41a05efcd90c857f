//! Error types for kiosk-core

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while hashing, enumerating, or installing
/// bundled resources
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Failed to list resources under '{root}': {source}")]
    WalkRoot {
        root: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read bundled resource '{path}': {source}")]
    ReadResource {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Bundled resource not found: '{path}'")]
    MissingResource { path: String },

    #[error("Invalid resource path: '{path}'")]
    InvalidResourcePath { path: String },

    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to install '{path}': {source}")]
    WriteResource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to delete '{path}': {source}")]
    DeleteResource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read manifest '{path}': {source}")]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write manifest '{path}': {source}")]
    WriteManifest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
