//! Install-path resolution for kiosk applications
//!
//! This crate provides the platform-dependent pieces of deciding where an
//! application installs its resources:
//! - Token substitution for install-directory templates
//! - Per-user data directory lookup
//! - Application-name sanitization

mod error;
mod paths;

pub use error::PlatformError;
pub use paths::{
    APPDATA_TOKEN, APPNAME_TOKEN, expand_tokens, install_tokens, sanitize_app_name,
    system_data_dir,
};
