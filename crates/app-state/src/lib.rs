//! View state management for Prism Viewer
//!
//! This crate holds the observable state of the viewer page: the status
//! line, the site-info line, the frame overlay, and the image panel.
//! State lives behind a cheaply clonable [`StateHandle`]; the rendering
//! shell subscribes to change notifications and pulls snapshots.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod images;
pub mod status;
pub mod viewer;

use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::watch;

pub use images::ImageSlot;
pub use status::{StatusLine, StatusTone};
pub use viewer::{Delivery, EmbedPhase, SiteInfo, ViewerState};

/// Shared handle to the viewer state.
///
/// Clones share the same underlying state. Mutations go through
/// [`StateHandle::update`], which bumps a version counter that
/// subscribers observe through a watch channel.
#[derive(Debug, Clone)]
pub struct StateHandle {
    inner: Arc<RwLock<ViewerState>>,
    version: watch::Sender<u64>,
}

impl StateHandle {
    /// Create a handle holding the initial page state.
    pub fn new() -> Self {
        let (version, _) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(ViewerState::default())),
            version,
        }
    }

    /// Take a snapshot of the current state.
    pub fn snapshot(&self) -> ViewerState {
        self.inner.read().clone()
    }

    /// Mutate the state and notify subscribers.
    pub fn update<R>(&self, f: impl FnOnce(&mut ViewerState) -> R) -> R {
        let result = f(&mut self.inner.write());
        self.version.send_modify(|v| *v += 1);
        result
    }

    /// Subscribe to change notifications.
    ///
    /// The receiver yields a monotonically increasing version number;
    /// the actual state is pulled with [`StateHandle::snapshot`].
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }
}

impl Default for StateHandle {
    fn default() -> Self {
        Self::new()
    }
}
