//! Error types for kiosk-platform

use thiserror::Error;

/// Errors that can occur while resolving install locations
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Failed to determine the user data directory")]
    NoDataDirectory,
}
