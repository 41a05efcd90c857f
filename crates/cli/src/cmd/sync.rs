//! Implementation of the `kiosk sync` command.
//!
//! Claims the install directory, then reconciles its resource tree with
//! the given resource directory the same way an embedding application
//! does at startup.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use kiosk_core::{DirBundle, compute_manifest, sync_resources};
use kiosk_shell::prepare_install_dir;

use crate::output::{print_info, print_stat};

pub fn cmd_sync(resource_dir: &Path, install_dir: &Path, mount: &str) -> Result<()> {
    let bundle = DirBundle::new(mount, resource_dir);
    let manifest = compute_manifest(&bundle)
        .with_context(|| format!("Failed to hash resources under {}", resource_dir.display()))?;

    let layout = prepare_install_dir(install_dir)
        .with_context(|| format!("Failed to prepare {}", install_dir.display()))?;
    let report = sync_resources(&bundle, &manifest, layout.dirs())
        .context("Failed to synchronize resources")?;
    info!(
        root = %install_dir.display(),
        copied = report.copied.len(),
        deleted = report.deleted.len(),
        "install directory synchronized"
    );

    if report.is_noop() {
        print_info("Nothing to do; install directory is up to date");
        return Ok(());
    }

    if report.first_run {
        print_info("No manifest found; installed the full resource tree");
    }
    println!();
    println!("Sync complete!");
    print_stat("Resources copied", &report.copied.len().to_string());
    print_stat("Resources deleted", &report.deleted.len().to_string());
    print_stat(
        "Manifest",
        &layout.dirs().manifest_path().display().to_string(),
    );

    Ok(())
}
