//! Error types for kiosk-shell

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while preparing an install directory or driving
/// windows
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Platform error: {0}")]
    Platform(#[from] kiosk_platform::PlatformError),

    #[error("Resource error: {0}")]
    Core(#[from] kiosk_core::CoreError),

    #[error("Failed to parse configuration: {0}")]
    ParseConfig(#[from] toml::de::Error),

    #[error("Failed to read configuration file '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot install into '{path}': it exists and is not a directory")]
    InstallNotADirectory { path: PathBuf },

    #[error("Cannot install into '{path}': it is not empty and was not created by kiosk")]
    InstallNotOwned { path: PathBuf },

    #[error("Failed to inspect install directory '{path}': {source}")]
    InspectInstallDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot build a file URL for '{path}'")]
    InvalidFileUrl { path: PathBuf },

    #[error("Window backend error: {0}")]
    Backend(String),
}
