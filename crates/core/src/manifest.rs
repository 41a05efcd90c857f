//! Resource manifests mapping logical paths to content digests
//!
//! A manifest describes the exact content of a resource bundle: one entry
//! per resource, keyed by its logical path. Two manifests are diffed to
//! decide which installed files a new build has to touch.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use tracing::warn;

/// A mapping from logical resource path to content digest.
///
/// Logical paths start with `/` and use `/` as the separator on every
/// platform. Digests are lowercase hex SHA-512 of the resource bytes.
/// Entries are kept in a [`BTreeMap`] so iteration and the persisted form
/// are always ordered by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceManifest {
    entries: BTreeMap<String, String>,
}

impl ResourceManifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// The digest recorded for `path`, if any.
    pub fn digest(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// Whether `path` has an entry.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Iterate over entries in ascending path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(path, digest)| (path.as_str(), digest.as_str()))
    }

    /// Iterate over paths in ascending order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the manifest in its persisted form: one `<path>=<digest>`
    /// line per entry, ascending by path, no trailing newline.
    ///
    /// Paths are written verbatim, without any escaping. Digests are hex,
    /// so the separator consumers split on is the last `=` of each line.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (i, (path, digest)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = write!(out, "{}={}", path, digest);
        }
        out
    }

    /// Parse the persisted form produced by [`ResourceManifest::serialize`].
    ///
    /// Empty lines are skipped. Each remaining line is split at its last
    /// `=`; everything before it is the path, everything after it the
    /// digest. A line with no `=` at all means the file is corrupt: the
    /// result is then an empty manifest, which makes every bundled resource
    /// look changed and forces a full reinstall on this run.
    pub fn parse(text: &str) -> Self {
        let mut entries = BTreeMap::new();

        for line in text.lines() {
            if line.is_empty() {
                continue;
            }
            let Some(sep) = line.rfind('=') else {
                warn!(line, "malformed manifest line; discarding stored manifest");
                return Self::new();
            };
            entries.insert(line[..sep].to_string(), line[sep + 1..].to_string());
        }

        Self { entries }
    }

    /// Collect every path whose content differs between `self` (the
    /// manifest of the current build) and `previous` (the persisted one):
    /// entries added, removed, or present in both with different digests.
    pub fn diff(&self, previous: &ResourceManifest) -> BTreeSet<String> {
        let mut changed = BTreeSet::new();

        for (path, digest) in &self.entries {
            if previous.digest(path) != Some(digest.as_str()) {
                changed.insert(path.clone());
            }
        }
        for path in previous.entries.keys() {
            if !self.entries.contains_key(path) {
                changed.insert(path.clone());
            }
        }

        changed
    }
}

impl FromIterator<(String, String)> for ResourceManifest {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
