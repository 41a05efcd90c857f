//! The shell: claim, synchronize, open, wait
//!
//! Ties the other pieces together in startup order. Resolving the install
//! location and synchronizing resources happen in the constructor, so a
//! shell that exists is always ready to open windows.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};
use url::Url;

use kiosk_core::{
    ActivityLatch, ResourceBundle, ResourceManifest, SyncReport, compute_manifest, sync_resources,
};
use kiosk_platform::{expand_tokens, install_tokens};

use crate::config::ShellConfig;
use crate::install::{InstallLayout, prepare_install_dir};
use crate::window::{WindowBackend, WindowHandle};
use crate::{Result, ShellError};

/// An initialized kiosk application shell.
///
/// Construction claims the install directory and synchronizes the bundled
/// resources into it; any failure there aborts startup with its cause.
/// Afterwards the shell can open any number of windows on the installed
/// pages and block until the last one closes.
pub struct Shell {
    config: ShellConfig,
    layout: InstallLayout,
    latch: Arc<ActivityLatch>,
    backend: Arc<dyn WindowBackend>,
    last_sync: SyncReport,
}

impl Shell {
    /// Initialize a shell, hashing `bundle` to obtain the current
    /// manifest.
    pub fn new<B>(config: ShellConfig, bundle: &B, backend: Arc<dyn WindowBackend>) -> Result<Self>
    where
        B: ResourceBundle + ?Sized,
    {
        let manifest = compute_manifest(bundle)?;
        Self::with_manifest(config, bundle, &manifest, backend)
    }

    /// Initialize a shell with a precomputed manifest, e.g. one generated
    /// at build time and shipped alongside the resources.
    pub fn with_manifest<B>(
        config: ShellConfig,
        bundle: &B,
        manifest: &ResourceManifest,
        backend: Arc<dyn WindowBackend>,
    ) -> Result<Self>
    where
        B: ResourceBundle + ?Sized,
    {
        let tokens = install_tokens(&config.app_name)?;
        let root = PathBuf::from(expand_tokens(&config.install_dir, &tokens));
        debug!(root = %root.display(), "resolved install directory");

        let layout = prepare_install_dir(&root)?;
        let report = sync_resources(bundle, manifest, layout.dirs())?;
        if report.is_noop() {
            debug!("installed resources already up to date");
        } else {
            info!(
                first_run = report.first_run,
                copied = report.copied.len(),
                deleted = report.deleted.len(),
                "synchronized installed resources"
            );
        }

        Ok(Self {
            config,
            layout,
            latch: Arc::new(ActivityLatch::new()),
            backend,
            last_sync: report,
        })
    }

    /// Open a window on the configured start page.
    pub fn open(&self) -> Result<Box<dyn WindowHandle>> {
        self.open_page(&self.config.start_page)
    }

    /// Open a window on `page`, resolved relative to the configured
    /// resource root.
    pub fn open_page(&self, page: &str) -> Result<Box<dyn WindowHandle>> {
        let url = self.page_url(page)?;
        debug!(%url, "opening window");

        // Count the window before the backend can possibly report it
        // closed; a failed open takes the count back down.
        self.latch.on_open();
        let latch = Arc::clone(&self.latch);
        let on_close = Box::new(move || {
            latch.on_close();
        });
        match self.backend.open(&url, on_close) {
            Ok(window) => Ok(window),
            Err(e) => {
                self.latch.on_close();
                Err(e)
            }
        }
    }

    /// The `file://` URL of `page` inside the installed resource tree.
    pub fn page_url(&self, page: &str) -> Result<Url> {
        let logical = join_resource_path(&self.config.resource_root, page);
        let installed = self.layout.dirs().resource_path(&logical)?;
        Url::from_file_path(&installed).map_err(|_| ShellError::InvalidFileUrl { path: installed })
    }

    /// Block the calling thread until every open window has closed.
    /// Returns immediately when none is open.
    pub fn wait_until_closed(&self) {
        self.latch.wait_idle();
    }

    /// Number of windows currently open.
    pub fn open_windows(&self) -> usize {
        self.latch.active()
    }

    /// What the startup synchronization pass did.
    pub fn last_sync(&self) -> &SyncReport {
        &self.last_sync
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// The resolved install root.
    pub fn install_dir(&self) -> &Path {
        self.layout.root()
    }

    /// Directory holding the installed resource tree.
    pub fn resources_dir(&self) -> &Path {
        self.layout.resources()
    }

    /// Directory for persistent application data. Exists once the shell
    /// is constructed.
    pub fn data_dir(&self) -> &Path {
        self.layout.data()
    }

    /// Directory reserved for the embedded browser engine.
    pub fn engine_dir(&self) -> &Path {
        self.layout.engine()
    }
}

/// Join a resource root and a page into one logical path, tolerating a
/// missing or doubled `/` at the seam.
fn join_resource_path(root: &str, page: &str) -> String {
    let root = root.trim_end_matches('/').trim_start_matches('/');
    let page = page.trim_start_matches('/');
    if root.is_empty() {
        format!("/{}", page)
    } else {
        format!("/{}/{}", root, page)
    }
}
