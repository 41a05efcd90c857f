//! kiosk-core: Resource synchronization and window-lifecycle primitives
//!
//! This crate provides the hash manifest that keeps an application's
//! bundled web resources synchronized with an on-disk install directory,
//! and the activity latch a launcher thread blocks on until every window
//! has closed.

mod bundle;
mod error;
mod hash;
mod latch;
mod manifest;
mod sync;

pub use bundle::{DirBundle, MemoryBundle, ResourceBundle, StaticBundle, compute_manifest};
pub use error::CoreError;
pub use hash::{hash_bytes, hash_file, hash_reader};
pub use latch::ActivityLatch;
pub use manifest::ResourceManifest;
pub use sync::{
    InstallDirs, MANIFEST_FILE, SyncReport, read_manifest, sync_resources, write_manifest,
};

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
