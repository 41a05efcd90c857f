//! Shared test helpers for CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment.
///
/// Each test gets its own temporary directory holding a resource tree and
/// an install directory.
pub struct TestEnv {
    pub temp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("resources")).unwrap();
        Self { temp }
    }

    /// The resource tree synced from.
    pub fn resource_dir(&self) -> PathBuf {
        self.temp.path().join("resources")
    }

    /// The install directory synced into. Not created up front; the CLI
    /// is expected to do that.
    pub fn install_dir(&self) -> PathBuf {
        self.temp.path().join("install")
    }

    /// Write a file into the resource tree.
    pub fn write_resource(&self, relative_path: &str, content: &str) {
        let path = self.resource_dir().join(relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
    }

    /// Remove a file from the resource tree.
    pub fn remove_resource(&self, relative_path: &str) {
        std::fs::remove_file(self.resource_dir().join(relative_path)).unwrap();
    }

    /// Path of a file installed under the default `/ui` mount.
    pub fn installed(&self, relative_path: &str) -> PathBuf {
        self.install_dir().join("resources").join("ui").join(relative_path)
    }

    pub fn installed_content(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.installed(relative_path)).unwrap()
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.install_dir().join(".kiosk-resource-hashes")
    }

    /// Get a Command for the kiosk binary.
    pub fn kiosk_cmd(&self) -> Command {
        cargo_bin_cmd!("kiosk")
    }

    /// Run `kiosk sync` against this environment and assert success.
    pub fn sync(&self) {
        self.kiosk_cmd()
            .arg("sync")
            .arg(self.resource_dir())
            .arg("--install-dir")
            .arg(self.install_dir())
            .assert()
            .success();
    }

    /// A plan command for this environment, ready for extra args.
    pub fn plan_cmd(&self) -> Command {
        let mut cmd = self.kiosk_cmd();
        cmd.arg("plan")
            .arg(self.resource_dir())
            .arg("--install-dir")
            .arg(self.install_dir());
        cmd
    }
}

/// Read a file, panicking with its path on failure.
pub fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}
