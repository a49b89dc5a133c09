//! Platform seam for Prism Viewer
//!
//! Implementations of the core's frame and tab seams, plus the event
//! channel a shell uses to deliver load signals back into the app. Two
//! hosts are provided: an in-memory headless host for tests and
//! default wiring, and an HTTP prober that issues a real request for
//! the framed URL.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod headless;
pub mod http;

use tokio::sync::mpsc;

use app_core::embed::AttemptId;

pub use headless::{HeadlessFrame, RecordingAlerts, RecordingTabs};
pub use http::HttpProberHost;

/// Signals the platform delivers back into the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    /// The inline frame finished loading for the given attempt
    FrameLoaded(AttemptId),
    /// The image panel's pending fetch completed
    ImageLoaded(String),
    /// The image panel's pending fetch failed
    ImageFailed(String),
}

/// Sending half of the platform event channel.
pub type EventSender = mpsc::UnboundedSender<PlatformEvent>;

/// Receiving half of the platform event channel.
pub type EventReceiver = mpsc::UnboundedReceiver<PlatformEvent>;

/// Create the platform event channel.
pub fn event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// Blocking alert prompt the shell presents to the user.
pub trait AlertPresenter: Send + Sync {
    /// Show `message` and wait for dismissal.
    fn alert(&self, message: &str);
}
