//! Shared region selection
//!
//! The selected region lives in a `tokio::sync::watch` channel. Setting it is
//! synchronous and immediately visible to every subscriber; views poll their
//! subscription to learn that they need to regenerate their data.

use tokio::sync::watch;

use crate::data::RegionCode;

/// Holds the currently selected region
#[derive(Debug)]
pub struct RegionStore {
    tx: watch::Sender<RegionCode>,
}

impl RegionStore {
    pub fn new(initial: RegionCode) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Returns the selected region
    pub fn current(&self) -> RegionCode {
        self.tx.borrow().clone()
    }

    /// Selects a region
    ///
    /// Selecting the region that is already current does not notify
    /// subscribers. Returns whether the selection changed.
    pub fn set(&self, code: RegionCode) -> bool {
        let changed = self.tx.send_if_modified(|current| {
            if *current == code {
                false
            } else {
                *current = code.clone();
                true
            }
        });
        if changed {
            tracing::info!(region = %code, "region selected");
        }
        changed
    }

    /// Creates a handle that observes future selections
    pub fn subscribe(&self) -> RegionSubscription {
        RegionSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for RegionStore {
    fn default() -> Self {
        Self::new(RegionCode::all())
    }
}

/// A view's handle on the region store
#[derive(Debug, Clone)]
pub struct RegionSubscription {
    rx: watch::Receiver<RegionCode>,
}

impl RegionSubscription {
    pub fn current(&self) -> RegionCode {
        self.rx.borrow().clone()
    }

    /// Returns the new region once per change, `None` if nothing changed
    pub fn take_changed(&mut self) -> Option<RegionCode> {
        match self.rx.has_changed() {
            Ok(true) => Some(self.rx.borrow_and_update().clone()),
            _ => None,
        }
    }
}
