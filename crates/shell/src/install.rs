//! Install-directory ownership and layout
//!
//! Before anything is written, the target directory must be claimed: it
//! may be absent or empty, or it must carry the marker file a previous run
//! left behind. Anything else is someone else's data and is refused.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use kiosk_core::InstallDirs;

use crate::{Result, ShellError};

/// Marker file that tags a directory as a kiosk install.
pub const MARKER_FILE: &str = ".kiosk-marker";

/// The full on-disk layout of an install directory.
#[derive(Debug, Clone)]
pub struct InstallLayout {
    dirs: InstallDirs,
    data: PathBuf,
    engine: PathBuf,
}

impl InstallLayout {
    /// Describe the layout rooted at `root`. Nothing is created on disk.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let dirs = InstallDirs::new(root);
        let data = dirs.root().join("data");
        let engine = dirs.root().join("engine");
        Self { dirs, data, engine }
    }

    /// The resource area: install root, resources subtree, manifest path.
    pub fn dirs(&self) -> &InstallDirs {
        &self.dirs
    }

    pub fn root(&self) -> &Path {
        self.dirs.root()
    }

    /// Where installed resources land.
    pub fn resources(&self) -> &Path {
        self.dirs.resources()
    }

    /// Directory for persistent application data.
    pub fn data(&self) -> &Path {
        &self.data
    }

    /// Directory reserved for the embedded browser engine's own files.
    pub fn engine(&self) -> &Path {
        &self.engine
    }

    pub fn marker_path(&self) -> PathBuf {
        self.dirs.root().join(MARKER_FILE)
    }
}

/// Check that `root` is safe to install into: absent, an empty directory,
/// or a directory holding the kiosk marker file.
pub fn ensure_safe(root: &Path) -> Result<()> {
    if !root.exists() {
        return Ok(());
    }
    if !root.is_dir() {
        return Err(ShellError::InstallNotADirectory {
            path: root.to_path_buf(),
        });
    }

    let inspect = |source| ShellError::InspectInstallDir {
        path: root.to_path_buf(),
        source,
    };

    let mut occupied = false;
    for entry in fs::read_dir(root).map_err(inspect)? {
        let entry = entry.map_err(inspect)?;
        if entry.file_name() == MARKER_FILE {
            return Ok(());
        }
        occupied = true;
    }

    if occupied {
        Err(ShellError::InstallNotOwned {
            path: root.to_path_buf(),
        })
    } else {
        Ok(())
    }
}

/// Claim `root` and create the full layout beneath it: the resources,
/// data, and engine directories plus the marker file. Rerunning against an
/// existing kiosk install is a no-op.
pub fn prepare_install_dir(root: &Path) -> Result<InstallLayout> {
    ensure_safe(root)?;

    let layout = InstallLayout::new(root);
    for dir in [
        layout.root(),
        layout.resources(),
        layout.data(),
        layout.engine(),
    ] {
        fs::create_dir_all(dir).map_err(|source| ShellError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let marker = layout.marker_path();
    fs::write(&marker, b"").map_err(|source| ShellError::WriteFile {
        path: marker.clone(),
        source,
    })?;
    debug!(root = %layout.root().display(), "prepared install directory");

    Ok(layout)
}
