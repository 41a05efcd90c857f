//! Implementation of the `kiosk info` command.

use std::path::Path;

use anyhow::{Context, Result};

use kiosk_core::read_manifest;
use kiosk_shell::InstallLayout;

use crate::output::{print_stat, truncate_hash};

/// Summarize the state of an install directory: ownership marker,
/// persisted manifest, and the tracked resources.
pub fn cmd_info(install_dir: &Path) -> Result<()> {
    let layout = InstallLayout::new(install_dir);

    println!("Install directory: {}", layout.root().display());
    let claimed = layout.marker_path().is_file();
    print_stat("Claimed by kiosk", if claimed { "yes" } else { "no" });

    let manifest_path = layout.dirs().manifest_path();
    if !manifest_path.is_file() {
        print_stat("Manifest", "none (next sync installs everything)");
        return Ok(());
    }

    let manifest = read_manifest(manifest_path).context("Failed to read installed manifest")?;
    print_stat("Tracked resources", &manifest.len().to_string());
    for (path, digest) in manifest.iter() {
        println!("    {}  {}", truncate_hash(digest), path);
    }

    Ok(())
}
