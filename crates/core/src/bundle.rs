//! Resource bundles and manifest computation
//!
//! A [`ResourceBundle`] abstracts where bundled files physically live: a
//! directory tree during development, byte slices embedded in the binary
//! for release builds, or an in-memory map in tests. Hashing and
//! reconciliation only ever see logical paths and readers, so they do not
//! care which one backs them.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::hash::hash_reader;
use crate::manifest::ResourceManifest;
use crate::{CoreError, Result};

/// Access to the set of resources bundled with an application.
///
/// Logical paths start with `/` and use `/` as the separator on every
/// platform, e.g. `/ui/css/app.css`.
pub trait ResourceBundle {
    /// Enumerate the logical path of every bundled resource.
    fn paths(&self) -> Result<Vec<String>>;

    /// Open one bundled resource for reading.
    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>>;
}

/// Hash every resource in a bundle, producing the manifest that describes
/// the bundle's current content.
///
/// Any enumeration or read failure aborts the computation; a partial
/// manifest is never produced.
pub fn compute_manifest<B: ResourceBundle + ?Sized>(bundle: &B) -> Result<ResourceManifest> {
    let mut entries = BTreeMap::new();

    for path in bundle.paths()? {
        let reader = bundle.open(&path)?;
        let digest = hash_reader(reader).map_err(|source| CoreError::ReadResource {
            path: path.clone(),
            source,
        })?;
        entries.insert(path, digest);
    }

    Ok(entries.into_iter().collect())
}

/// A bundle rooted in one or more on-disk directory trees.
///
/// Each root is mounted at a logical prefix: with root `assets/` mounted at
/// `/ui`, the file `assets/css/app.css` gets the logical path
/// `/ui/css/app.css`. When several roots yield the same logical path, the
/// earliest root wins on [`ResourceBundle::open`].
pub struct DirBundle {
    roots: Vec<(String, PathBuf)>,
}

impl DirBundle {
    /// Bundle a single directory tree mounted at `prefix`.
    pub fn new(prefix: &str, root: impl Into<PathBuf>) -> Self {
        Self::with_roots(vec![(prefix.to_string(), root.into())])
    }

    /// Bundle several directory trees, each mounted at its own prefix.
    pub fn with_roots(roots: Vec<(String, PathBuf)>) -> Self {
        let roots = roots
            .into_iter()
            .map(|(prefix, root)| (normalize_prefix(&prefix), root))
            .collect();
        Self { roots }
    }

    fn locate(&self, path: &str) -> Option<PathBuf> {
        for (prefix, root) in &self.roots {
            let Some(rel) = strip_mount(path, prefix) else {
                continue;
            };
            let mut candidate = root.clone();
            for segment in rel.split('/') {
                candidate.push(segment);
            }
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        None
    }
}

impl ResourceBundle for DirBundle {
    fn paths(&self) -> Result<Vec<String>> {
        let mut paths = BTreeSet::new();

        for (prefix, root) in &self.roots {
            for entry in WalkDir::new(root).sort_by_file_name() {
                let entry = entry.map_err(|e| CoreError::WalkRoot {
                    root: root.clone(),
                    source: e.into(),
                })?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
                paths.insert(logical_path(prefix, rel)?);
            }
        }

        Ok(paths.into_iter().collect())
    }

    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>> {
        validate_request(path)?;
        let Some(file_path) = self.locate(path) else {
            return Err(CoreError::MissingResource {
                path: path.to_string(),
            });
        };
        let file = File::open(&file_path).map_err(|source| CoreError::ReadResource {
            path: path.to_string(),
            source,
        })?;
        Ok(Box::new(file))
    }
}

/// A bundle of resources embedded in the binary, typically built from
/// `include_bytes!` entries.
pub struct StaticBundle {
    entries: &'static [(&'static str, &'static [u8])],
}

impl StaticBundle {
    pub const fn new(entries: &'static [(&'static str, &'static [u8])]) -> Self {
        Self { entries }
    }
}

impl ResourceBundle for StaticBundle {
    fn paths(&self) -> Result<Vec<String>> {
        let mut paths: Vec<String> = self.entries.iter().map(|(p, _)| p.to_string()).collect();
        paths.sort();
        Ok(paths)
    }

    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>> {
        self.entries
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, bytes)| Box::new(*bytes) as Box<dyn Read>)
            .ok_or_else(|| CoreError::MissingResource {
                path: path.to_string(),
            })
    }
}

/// A mutable in-memory bundle.
///
/// Handy in tests and for generated content: resources can be added,
/// replaced, and removed between manifest computations.
#[derive(Debug, Clone, Default)]
pub struct MemoryBundle {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a resource.
    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(path.into(), bytes.into());
    }

    /// Remove a resource. Unknown paths are ignored.
    pub fn remove(&mut self, path: &str) {
        self.entries.remove(path);
    }
}

impl ResourceBundle for MemoryBundle {
    fn paths(&self) -> Result<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>> {
        self.entries
            .get(path)
            .map(|bytes| Box::new(bytes.as_slice()) as Box<dyn Read + '_>)
            .ok_or_else(|| CoreError::MissingResource {
                path: path.to_string(),
            })
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Reject request paths that could name a file outside the bundle roots:
/// anything not starting with `/`, or containing an empty, `.`, or `..`
/// segment.
fn validate_request(path: &str) -> Result<()> {
    let invalid = || CoreError::InvalidResourcePath {
        path: path.to_string(),
    };
    let rel = path.strip_prefix('/').ok_or_else(invalid)?;
    if rel.split('/').any(|s| s.is_empty() || s == "." || s == "..") {
        return Err(invalid());
    }
    Ok(())
}

/// The part of `path` below `prefix`, without its leading slash.
fn strip_mount<'p>(path: &'p str, prefix: &str) -> Option<&'p str> {
    path.strip_prefix(prefix)?.strip_prefix('/')
}

fn logical_path(prefix: &str, rel: &Path) -> Result<String> {
    let mut logical = prefix.to_string();
    for component in rel.components() {
        let Some(segment) = component.as_os_str().to_str() else {
            return Err(CoreError::InvalidResourcePath {
                path: rel.to_string_lossy().into_owned(),
            });
        };
        logical.push('/');
        logical.push_str(segment);
    }
    Ok(logical)
}
