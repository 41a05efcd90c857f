//! Install-directory reconciliation
//!
//! Keeps the installed copy of a resource bundle synchronized with the
//! manifest computed for the current build. The previous run's manifest is
//! persisted next to the installed files; diffing it against the current
//! one yields the minimal set of copies and deletes for this run. A rerun
//! against an unchanged bundle touches nothing.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::bundle::ResourceBundle;
use crate::manifest::ResourceManifest;
use crate::{CoreError, Result};

/// Name of the persisted manifest file inside an install root.
pub const MANIFEST_FILE: &str = ".kiosk-resource-hashes";

/// Paths of the resource area inside an install root.
///
/// Constructing one describes the layout; nothing is created on disk.
#[derive(Debug, Clone)]
pub struct InstallDirs {
    root: PathBuf,
    resources: PathBuf,
    manifest_path: PathBuf,
}

impl InstallDirs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let resources = root.join("resources");
        let manifest_path = root.join(MANIFEST_FILE);
        Self {
            root,
            resources,
            manifest_path,
        }
    }

    /// The install root itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The subtree installed resources are copied into.
    pub fn resources(&self) -> &Path {
        &self.resources
    }

    /// Where the manifest of the installed resources is persisted.
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Map a logical resource path to its installed location.
    ///
    /// Rejects paths that do not start with `/` or that contain empty,
    /// `.`, or `..` segments, so no manifest entry can ever name a file
    /// outside the resources subtree.
    pub fn resource_path(&self, logical: &str) -> Result<PathBuf> {
        let invalid = || CoreError::InvalidResourcePath {
            path: logical.to_string(),
        };

        let Some(rel) = logical.strip_prefix('/') else {
            return Err(invalid());
        };
        let mut installed = self.resources.clone();
        for segment in rel.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." {
                return Err(invalid());
            }
            installed.push(segment);
        }
        Ok(installed)
    }
}

/// What a reconciliation pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// No previous manifest existed; the whole bundle was installed.
    pub first_run: bool,
    /// Logical paths copied or overwritten this run, in order.
    pub copied: Vec<String>,
    /// Logical paths whose installed file was removed this run, in order.
    pub deleted: Vec<String>,
}

impl SyncReport {
    /// Whether the pass wrote nothing at all.
    pub fn is_noop(&self) -> bool {
        !self.first_run && self.copied.is_empty() && self.deleted.is_empty()
    }
}

/// Reconcile the installed resources with `current`, the manifest of the
/// bundle shipped with this build.
///
/// On the first run (no persisted manifest) every resource named by
/// `current` is installed. On later runs only paths whose digest changed
/// are copied, paths that left the bundle are deleted, and the persisted
/// manifest is replaced. The install root must already exist; parent
/// directories below it are created as needed.
///
/// A resource named by `current` but missing from `bundle` is an error:
/// the bundle no longer matches the manifest it shipped with.
pub fn sync_resources<B: ResourceBundle + ?Sized>(
    bundle: &B,
    current: &ResourceManifest,
    dirs: &InstallDirs,
) -> Result<SyncReport> {
    if !dirs.manifest_path().exists() {
        debug!("no persisted manifest; installing every bundled resource");
        return first_install(bundle, current, dirs);
    }

    let previous = read_manifest(dirs.manifest_path())?;
    let changed = current.diff(&previous);
    if changed.is_empty() {
        debug!("installed resources match the current build");
        return Ok(SyncReport::default());
    }

    let mut report = SyncReport::default();
    for path in changed {
        if current.contains(&path) {
            debug!(resource = %path, "installing changed resource");
            install_resource(bundle, &path, dirs)?;
            report.copied.push(path);
        } else {
            debug!(resource = %path, "deleting removed resource");
            delete_if_present(&dirs.resource_path(&path)?)?;
            report.deleted.push(path);
        }
    }

    write_manifest(current, dirs)?;
    Ok(report)
}

fn first_install<B: ResourceBundle + ?Sized>(
    bundle: &B,
    current: &ResourceManifest,
    dirs: &InstallDirs,
) -> Result<SyncReport> {
    let mut report = SyncReport {
        first_run: true,
        ..Default::default()
    };

    for (path, _) in current.iter() {
        install_resource(bundle, path, dirs)?;
        report.copied.push(path.to_string());
    }

    write_manifest(current, dirs)?;
    Ok(report)
}

fn install_resource<B: ResourceBundle + ?Sized>(
    bundle: &B,
    path: &str,
    dirs: &InstallDirs,
) -> Result<()> {
    let installed = dirs.resource_path(path)?;
    if let Some(parent) = installed.parent() {
        fs::create_dir_all(parent).map_err(|source| CoreError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut reader = bundle.open(path)?;
    let mut file = fs::File::create(&installed).map_err(|source| CoreError::WriteResource {
        path: installed.clone(),
        source,
    })?;
    io::copy(&mut reader, &mut file).map_err(|source| CoreError::WriteResource {
        path: installed.clone(),
        source,
    })?;
    Ok(())
}

/// Deleting an already-absent file is not an error: a crash between a
/// delete and the manifest write leaves entries for files that are gone,
/// and the retry must converge anyway.
fn delete_if_present(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(CoreError::DeleteResource {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read and parse a persisted manifest.
///
/// An unreadable file is an error. A readable file with malformed content
/// parses to the empty manifest (see [`ResourceManifest::parse`]), which
/// makes the next reconciliation reinstall everything.
pub fn read_manifest(path: &Path) -> Result<ResourceManifest> {
    let text = fs::read_to_string(path).map_err(|source| CoreError::ReadManifest {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ResourceManifest::parse(&text))
}

/// Persist `manifest` at the layout's manifest path.
///
/// The content goes through a temporary file in the install root that is
/// renamed over the target, so a crash never leaves a half-written
/// manifest behind.
pub fn write_manifest(manifest: &ResourceManifest, dirs: &InstallDirs) -> Result<()> {
    let wrap = |source: io::Error| CoreError::WriteManifest {
        path: dirs.manifest_path().to_path_buf(),
        source,
    };

    let mut file = NamedTempFile::new_in(dirs.root()).map_err(wrap)?;
    file.write_all(manifest.serialize().as_bytes()).map_err(wrap)?;
    file.persist(dirs.manifest_path()).map_err(|e| wrap(e.error))?;
    Ok(())
}
