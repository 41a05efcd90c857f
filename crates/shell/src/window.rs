//! Window backend collaborator
//!
//! The shell renders nothing itself. The embedding application supplies a
//! [`WindowBackend`] that owns the actual browser windows; the shell only
//! dictates which URL a window starts on and observes each window's close
//! through the callback it hands over.

use std::sync::Mutex;

use tracing::debug;
use url::Url;

use crate::Result;

/// Invoked exactly once when the associated window closes.
pub type CloseCallback = Box<dyn FnOnce() + Send + 'static>;

/// Creates browser windows on behalf of the shell.
pub trait WindowBackend: Send + Sync {
    /// Open a window showing `url`.
    ///
    /// The backend must invoke `on_close` exactly once when the window
    /// closes, and never before this call has returned.
    fn open(&self, url: &Url, on_close: CloseCallback) -> Result<Box<dyn WindowHandle>>;
}

/// A live window created by a [`WindowBackend`].
pub trait WindowHandle: Send {
    /// Navigate the window to another URL.
    fn navigate(&self, url: &Url) -> Result<()>;

    /// Close the window. Closing an already-closed window is a no-op.
    fn close(&self) -> Result<()>;
}

/// A backend that opens no real windows.
///
/// Each "window" only remembers its current URL and runs its close
/// callback when told to close. Used in tests and for driving a shell on
/// machines without a display.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    opened: Mutex<Vec<Url>>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs of every window this backend has opened, in order.
    pub fn opened(&self) -> Vec<Url> {
        self.opened.lock().unwrap().clone()
    }
}

impl WindowBackend for HeadlessBackend {
    fn open(&self, url: &Url, on_close: CloseCallback) -> Result<Box<dyn WindowHandle>> {
        debug!(%url, "opening headless window");
        self.opened.lock().unwrap().push(url.clone());
        Ok(Box::new(HeadlessWindow {
            url: Mutex::new(url.clone()),
            on_close: Mutex::new(Some(on_close)),
        }))
    }
}

/// Window handle produced by [`HeadlessBackend`].
pub struct HeadlessWindow {
    url: Mutex<Url>,
    on_close: Mutex<Option<CloseCallback>>,
}

impl WindowHandle for HeadlessWindow {
    fn navigate(&self, url: &Url) -> Result<()> {
        *self.url.lock().unwrap() = url.clone();
        Ok(())
    }

    fn close(&self) -> Result<()> {
        let callback = self.on_close.lock().unwrap().take();
        if let Some(callback) = callback {
            callback();
        }
        Ok(())
    }
}
