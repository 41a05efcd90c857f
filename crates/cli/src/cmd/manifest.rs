//! Implementation of the `kiosk manifest` command.

use std::path::Path;

use anyhow::{Context, Result};

use kiosk_core::{DirBundle, compute_manifest};

use crate::output::print_success;

/// Hash a resource tree and emit its manifest.
///
/// With `--output` the manifest is written to a file, the form an
/// embedding application ships next to its resources; otherwise it goes
/// to stdout.
pub fn cmd_manifest(resource_dir: &Path, mount: &str, output: Option<&Path>) -> Result<()> {
    let bundle = DirBundle::new(mount, resource_dir);
    let manifest = compute_manifest(&bundle)
        .with_context(|| format!("Failed to hash resources under {}", resource_dir.display()))?;
    let text = manifest.serialize();

    match output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            print_success(&format!(
                "Wrote {} entries to {}",
                manifest.len(),
                path.display()
            ));
        }
        None => {
            if !text.is_empty() {
                println!("{}", text);
            }
        }
    }

    Ok(())
}
