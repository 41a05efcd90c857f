//! kiosk-shell: The application-facing embedding layer
//!
//! A [`Shell`] owns one install directory and one window backend. On
//! construction it resolves the configured install location, claims the
//! directory, and synchronizes the bundled resources into it; afterwards
//! it opens windows on the installed start page and can block until the
//! last of them closes.

mod app;
mod config;
mod error;
mod install;
mod window;

pub use app::Shell;
pub use config::ShellConfig;
pub use error::ShellError;
pub use install::{InstallLayout, MARKER_FILE, ensure_safe, prepare_install_dir};
pub use window::{CloseCallback, HeadlessBackend, HeadlessWindow, WindowBackend, WindowHandle};

/// Result type for shell operations
pub type Result<T> = std::result::Result<T, ShellError>;
