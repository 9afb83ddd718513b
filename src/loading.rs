//! Simulated loading delays
//!
//! Every view shows a loading state for a fixed delay after its data changes.
//! A `LoadingTask` owns one such delay as a tokio task racing a sleep against
//! a cancellation channel, so a view that is torn down or reloaded before the
//! delay elapses never sees a stale completion.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::oneshot;

/// Delay after selecting a new region
pub const REGION_SWITCH: Duration = Duration::from_millis(800);

/// Delay when the dashboard first opens
pub const DASHBOARD_ENTRY: Duration = Duration::from_millis(1000);

/// Delay before the nationwide fire map appears
pub const MAP_LOAD: Duration = Duration::from_millis(1500);

/// Delay while a fire report is being submitted
pub const SUBMISSION: Duration = Duration::from_millis(2000);

/// Delay before the impact gauge animates to its level
pub const IMPACT_PROGRESS: Duration = Duration::from_millis(500);

/// A fixed-delay loading flag with a cancellation handle
#[derive(Debug)]
pub struct LoadingTask {
    done: Arc<AtomicBool>,
    cancel_tx: Option<oneshot::Sender<()>>,
    delay: Duration,
}

impl LoadingTask {
    /// Starts a loading state that clears after `delay`
    ///
    /// Outside a tokio runtime there is nothing to drive the timer, so the
    /// task is returned already finished.
    pub fn spawn(delay: Duration) -> Self {
        let done = Arc::new(AtomicBool::new(false));

        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::debug!(?delay, "no runtime, skipping loading delay");
                return Self::finished();
            }
        };

        let (cancel_tx, cancel_rx) = oneshot::channel();
        let flag = Arc::clone(&done);
        handle.spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    flag.store(true, Ordering::Release);
                }
                _ = cancel_rx => {}
            }
        });

        Self {
            done,
            cancel_tx: Some(cancel_tx),
            delay,
        }
    }

    /// A task that has already completed
    pub fn finished() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(true)),
            cancel_tx: None,
            delay: Duration::ZERO,
        }
    }

    pub fn is_loading(&self) -> bool {
        !self.done.load(Ordering::Acquire)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Stops the timer; a cancelled task never completes
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for LoadingTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
