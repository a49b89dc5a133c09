//! HTTP prober frame host
//!
//! Stands in for a real inline frame by issuing a GET for the framed
//! URL. Any response at all counts as the load signal — a browser
//! frame fires load for error pages too — while transport failures
//! emit nothing, so the controller's timeout decides. This inherits
//! the heuristic's known false positive: a reachable page that would
//! refuse framing still produces a load signal.

use std::time::Duration;

use app_core::embed::{AttemptId, FrameHost};

use crate::{EventSender, PlatformEvent};

/// Cap on a single probe request, comfortably past the embed timeout
/// so the race is decided by the controller, not the client.
const PROBE_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Frame host that probes URLs over HTTP.
pub struct HttpProberHost {
    client: reqwest::Client,
    events: EventSender,
}

impl HttpProberHost {
    /// Create a prober delivering load signals into `events`.
    pub fn new(events: EventSender) -> Self {
        let client = reqwest::Client::builder()
            .timeout(PROBE_REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client, events }
    }
}

impl FrameHost for HttpProberHost {
    fn navigate(&self, attempt: AttemptId, url: &str) {
        let client = self.client.clone();
        let events = self.events.clone();
        let url = url.to_string();
        tokio::spawn(async move {
            match client.get(&url).send().await {
                Ok(response) => {
                    tracing::debug!(%attempt, %url, status = %response.status(), "probe completed");
                    let _ = events.send(PlatformEvent::FrameLoaded(attempt));
                }
                Err(err) => {
                    // No signal: the attempt resolves through its timeout.
                    tracing::warn!(%attempt, %url, error = %err, "probe failed");
                }
            }
        });
    }
}
