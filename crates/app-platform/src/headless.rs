//! In-memory platform host
//!
//! Records every outbound effect instead of performing it, and lets the
//! caller decide when (and whether) a navigation produces a load
//! signal. Used by the integration tests and as the default wiring for
//! shells that bind their own frame.

use parking_lot::Mutex;

use app_core::embed::{AttemptId, FrameHost, TabOpener};

use crate::{AlertPresenter, EventSender, PlatformEvent};

/// Frame host that records navigations and emits load signals on
/// demand.
pub struct HeadlessFrame {
    events: EventSender,
    navigations: Mutex<Vec<(AttemptId, String)>>,
}

impl HeadlessFrame {
    /// Create a headless frame delivering signals into `events`.
    pub fn new(events: EventSender) -> Self {
        Self {
            events,
            navigations: Mutex::new(Vec::new()),
        }
    }

    /// Every navigation requested so far, oldest first.
    pub fn navigations(&self) -> Vec<(AttemptId, String)> {
        self.navigations.lock().clone()
    }

    /// Attempt id of the most recent navigation.
    pub fn last_attempt(&self) -> Option<AttemptId> {
        self.navigations.lock().last().map(|(id, _)| *id)
    }

    /// Emit the load signal for the most recent navigation.
    pub fn complete_last_navigation(&self) {
        if let Some(id) = self.last_attempt() {
            self.complete_navigation(id);
        }
    }

    /// Emit the load signal for a specific attempt.
    pub fn complete_navigation(&self, attempt: AttemptId) {
        // A dropped receiver just means nobody is listening anymore.
        let _ = self.events.send(PlatformEvent::FrameLoaded(attempt));
    }
}

impl FrameHost for HeadlessFrame {
    fn navigate(&self, attempt: AttemptId, url: &str) {
        self.navigations.lock().push((attempt, url.to_string()));
    }
}

/// Tab opener that records opened URLs.
#[derive(Default)]
pub struct RecordingTabs {
    opened: Mutex<Vec<String>>,
}

impl RecordingTabs {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs opened so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().clone()
    }
}

impl TabOpener for RecordingTabs {
    fn open_tab(&self, url: &str) {
        self.opened.lock().push(url.to_string());
    }
}

/// Alert presenter that records messages instead of blocking.
#[derive(Default)]
pub struct RecordingAlerts {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlerts {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages presented so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl AlertPresenter for RecordingAlerts {
    fn alert(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_channel;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_headless_frame_records_and_completes() {
        let (tx, mut rx) = event_channel();
        let frame = Arc::new(HeadlessFrame::new(tx));

        assert!(frame.last_attempt().is_none());
        frame.complete_last_navigation();
        assert!(rx.try_recv().is_err());

        // Drive the trait directly; real ids come from the controller.
        let state = app_state::StateHandle::new();
        let tabs = Arc::new(RecordingTabs::new());
        let controller = app_core::embed::EmbedController::new(
            state,
            frame.clone(),
            tabs,
        );
        controller.attempt_embed("https://example.com".to_string()).await;

        let navigations = frame.navigations();
        assert_eq!(navigations.len(), 1);
        assert_eq!(navigations[0].1, "https://example.com");

        frame.complete_last_navigation();
        assert_eq!(
            rx.recv().await,
            Some(PlatformEvent::FrameLoaded(navigations[0].0))
        );
    }

    #[test]
    fn test_recorders() {
        let tabs = RecordingTabs::new();
        tabs.open_tab("https://example.com");
        assert_eq!(tabs.opened(), ["https://example.com"]);

        let alerts = RecordingAlerts::new();
        alerts.alert("Please enter a URL.");
        assert_eq!(alerts.messages(), ["Please enter a URL."]);
    }
}
