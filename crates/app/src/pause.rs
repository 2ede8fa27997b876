//! Re-armable one-shot timer used to lift the pause window.
//!
//! At most one expiry task is pending at a time: arming aborts the previous
//! task and replaces it.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Cancel-and-replace single-shot timer.
#[derive(Default)]
pub struct PauseTimer {
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl PauseTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `on_expiry` once `after` has elapsed, cancelling any expiry
    /// still pending from an earlier call.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm<F>(&self, after: Duration, on_expiry: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            on_expiry();
        });

        if let Some(previous) = self.lock().replace(handle) {
            previous.abort();
        }
    }

    /// Drop the pending expiry without running it.
    pub fn cancel(&self) {
        if let Some(previous) = self.lock().take() {
            previous.abort();
        }
    }

    /// Whether an expiry is still scheduled.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn lock(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for PauseTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
