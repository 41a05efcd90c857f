//! Window activity tracking
//!
//! Counts open windows so a launcher thread can block until the last one
//! closes. Window backends call [`ActivityLatch::on_open`] and
//! [`ActivityLatch::on_close`] around each window's lifetime; the launcher
//! parks in [`ActivityLatch::wait_idle`].

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// A latch that releases waiters whenever the count of open windows is
/// zero.
///
/// The wait condition is checked under the lock before parking, so a
/// waiter that arrives while nothing is open returns immediately, and a
/// close that races a new waiter cannot strand it.
#[derive(Debug, Default)]
pub struct ActivityLatch {
    count: Mutex<usize>,
    cond: Condvar,
}

impl ActivityLatch {
    pub fn new() -> Self {
        Self {
            count: Mutex::new(0),
            cond: Condvar::new(),
        }
    }

    /// Record a window opening.
    pub fn on_open(&self) {
        let mut count = self.lock_count();
        *count += 1;
    }

    /// Record a window closing.
    ///
    /// Returns true when this close released the latch, i.e. the count
    /// reached zero and every waiter was woken. Closing with nothing open
    /// keeps the count at zero and still wakes waiters.
    pub fn on_close(&self) -> bool {
        let mut count = self.lock_count();
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.cond.notify_all();
            true
        } else {
            false
        }
    }

    /// Number of windows currently open.
    pub fn active(&self) -> usize {
        *self.lock_count()
    }

    /// Block the calling thread until no window is open.
    pub fn wait_idle(&self) {
        let mut count = self.lock_count();
        while *count > 0 {
            count = self
                .cond
                .wait(count)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Block until no window is open or `timeout` elapses, whichever
    /// comes first. Returns true when the latch is idle.
    pub fn wait_idle_timeout(&self, timeout: Duration) -> bool {
        let count = self.lock_count();
        let (count, _) = self
            .cond
            .wait_timeout_while(count, timeout, |count| *count > 0)
            .unwrap_or_else(PoisonError::into_inner);
        *count == 0
    }

    // A poisoned count is still a valid count; reclaim it.
    fn lock_count(&self) -> MutexGuard<'_, usize> {
        self.count.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
