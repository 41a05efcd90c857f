//! Implementation of the `kiosk plan` command.
//!
//! Compares a resource tree against the manifest persisted in an install
//! directory and lists the copies and deletes a sync would perform,
//! without touching anything.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use kiosk_core::{DirBundle, InstallDirs, ResourceManifest, compute_manifest, read_manifest};

use crate::output::{self, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum ChangeKind {
    Add,
    Update,
    Remove,
}

#[derive(Debug, Serialize)]
struct PlannedChange {
    path: String,
    kind: ChangeKind,
}

pub fn cmd_plan(
    resource_dir: &Path,
    install_dir: &Path,
    mount: &str,
    format: OutputFormat,
) -> Result<()> {
    let bundle = DirBundle::new(mount, resource_dir);
    let current = compute_manifest(&bundle)
        .with_context(|| format!("Failed to hash resources under {}", resource_dir.display()))?;

    let dirs = InstallDirs::new(install_dir);
    let first_run = !dirs.manifest_path().exists();
    let previous = if first_run {
        ResourceManifest::new()
    } else {
        read_manifest(dirs.manifest_path()).context("Failed to read installed manifest")?
    };

    let changes: Vec<PlannedChange> = current
        .diff(&previous)
        .into_iter()
        .map(|path| {
            let kind = if !current.contains(&path) {
                ChangeKind::Remove
            } else if previous.contains(&path) {
                ChangeKind::Update
            } else {
                ChangeKind::Add
            };
            PlannedChange { path, kind }
        })
        .collect();

    if format.is_json() {
        return output::print_json(&serde_json::json!({
            "first_run": first_run,
            "changes": changes,
        }));
    }

    if changes.is_empty() {
        output::print_info("No changes; install directory is up to date");
        return Ok(());
    }

    if first_run {
        output::print_info("No manifest found; a sync would install everything");
    }
    for change in &changes {
        match change.kind {
            ChangeKind::Add => output::print_added(&change.path),
            ChangeKind::Update => output::print_modified(&change.path),
            ChangeKind::Remove => output::print_removed(&change.path),
        }
    }
    println!();
    println!("{} change(s) pending", changes.len());

    Ok(())
}
