//! Embed attempt lifecycle
//!
//! Given a target URL, the controller asks the platform to load it into
//! the inline frame and races the frame's load signal against a fixed
//! timeout. The load signal winning is treated as a successful embed;
//! the timer winning falls back to opening the URL in a new tab after a
//! short on-screen notice.
//!
//! Detection is heuristic, not authoritative: cross-origin responses
//! expose nothing beyond the load signal itself, and a blocked or blank
//! frame can still produce one. Such a page is reported as embedded.
//! That false positive is accepted here rather than hidden behind extra
//! machinery that could not make the signal trustworthy anyway.
//!
//! Every attempt carries its own id and owns its timer task, so signals
//! belonging to a superseded attempt are ignored instead of leaking
//! into the attempt that replaced it.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use uuid::Uuid;

use app_state::{Delivery, EmbedPhase, SiteInfo, StateHandle, StatusLine, StatusTone};

use crate::url::normalize_url;

/// How long to wait for the frame's load signal before falling back.
pub const EMBED_TIMEOUT: Duration = Duration::from_millis(1600);

/// How long the fallback notice stays on screen before the tab opens.
pub const FALLBACK_NOTICE_DELAY: Duration = Duration::from_millis(700);

/// Overlay text shown while the fallback tab open is pending.
pub const FALLBACK_NOTICE_TEXT: &str =
    "This site refuses to be embedded. Opening it in a new tab.";

/// Errors that can occur when opening a URL.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// The URL field was empty
    #[error("No URL entered")]
    EmptyInput,
}

/// Result type for embed operations
pub type Result<T> = std::result::Result<T, EmbedError>;

/// Identifier of a single embed attempt.
///
/// Platform callbacks carry the id of the attempt they belong to;
/// signals tagged with a stale id are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptId(Uuid);

impl AttemptId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One embed attempt, from request to resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedAttempt {
    /// Attempt identifier
    pub id: AttemptId,
    /// Normalized target URL
    pub target_url: String,
    /// When the attempt started
    pub started_at: DateTime<Utc>,
    /// Set when the load signal arrived first
    pub loaded: bool,
    /// Set when the timer fired first
    pub timed_out: bool,
}

impl EmbedAttempt {
    fn new(target_url: String) -> Self {
        Self {
            id: AttemptId::new(),
            target_url,
            started_at: Utc::now(),
            loaded: false,
            timed_out: false,
        }
    }
}

/// Inline frame the platform renders.
pub trait FrameHost: Send + Sync {
    /// Begin loading `url` into the inline frame on behalf of `attempt`.
    ///
    /// The host reports completion by delivering the frame's load
    /// signal back to the controller, tagged with the same attempt id.
    /// A navigation that never completes simply produces no signal.
    fn navigate(&self, attempt: AttemptId, url: &str);
}

/// Opens URLs in new browser tabs.
pub trait TabOpener: Send + Sync {
    /// Open `url` in a new tab with `noopener` isolation.
    fn open_tab(&self, url: &str);
}

struct ActiveAttempt {
    attempt: EmbedAttempt,
    timer: Option<JoinHandle<()>>,
}

/// Drives the embed attempt lifecycle and the observable fallback
/// behavior.
#[derive(Clone)]
pub struct EmbedController {
    state: StateHandle,
    frame: Arc<dyn FrameHost>,
    tabs: Arc<dyn TabOpener>,
    current: Arc<Mutex<Option<ActiveAttempt>>>,
}

impl EmbedController {
    /// Create a controller over the given state and platform seams.
    pub fn new(state: StateHandle, frame: Arc<dyn FrameHost>, tabs: Arc<dyn TabOpener>) -> Self {
        Self {
            state,
            frame,
            tabs,
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// Open raw user input, embedding inline or going straight to a new
    /// tab depending on the embed toggle.
    pub async fn open(&self, raw: &str, try_embed: bool) -> Result<()> {
        let url = normalize_url(raw).ok_or(EmbedError::EmptyInput)?;
        if try_embed {
            self.attempt_embed(url).await;
        } else {
            self.open_in_new_tab(url).await;
        }
        Ok(())
    }

    /// Start an embed attempt for an already-normalized URL.
    ///
    /// Any pending attempt is superseded: its timer is aborted and its
    /// remaining signals are ignored.
    pub async fn attempt_embed(&self, url: String) {
        let attempt = EmbedAttempt::new(url.clone());
        let id = attempt.id;

        {
            let mut current = self.current.lock().await;
            if let Some(prev) = current.take() {
                if let Some(timer) = prev.timer {
                    timer.abort();
                }
                if !prev.attempt.loaded && !prev.attempt.timed_out {
                    tracing::debug!(attempt = %prev.attempt.id, "superseding pending embed attempt");
                }
            }
            *current = Some(ActiveAttempt {
                attempt,
                timer: None,
            });
        }

        self.state.update(|state| {
            state.overlay = None;
            state.status = StatusLine::new("Loading...", StatusTone::Busy);
            state.phase = EmbedPhase::Loading;
            state.frame_url = Some(url.clone());
        });

        let timer = tokio::spawn({
            let controller = self.clone();
            async move { controller.run_embed_timer(id).await }
        });
        {
            let mut current = self.current.lock().await;
            match current.as_mut() {
                Some(active) if active.attempt.id == id => active.timer = Some(timer),
                // A newer attempt arrived before the timer was stored.
                _ => timer.abort(),
            }
        }

        self.frame.navigate(id, &url);
    }

    /// Deliver the frame's load signal for `attempt`.
    ///
    /// Load is treated as success unconditionally: cross-origin opacity
    /// means a blocked-but-loaded frame is indistinguishable from a
    /// real page.
    pub async fn frame_loaded(&self, id: AttemptId) {
        let url = {
            let mut current = self.current.lock().await;
            match current.as_mut() {
                Some(active)
                    if active.attempt.id == id
                        && !active.attempt.loaded
                        && !active.attempt.timed_out =>
                {
                    active.attempt.loaded = true;
                    if let Some(timer) = active.timer.take() {
                        timer.abort();
                    }
                    active.attempt.target_url.clone()
                }
                _ => {
                    tracing::debug!(attempt = %id, "ignoring load signal from a superseded or resolved attempt");
                    return;
                }
            }
        };

        self.state.update(|state| {
            state.status = StatusLine::new("Embedded successfully", StatusTone::Success);
            state.site_info = Some(SiteInfo::new(url.clone(), Delivery::InlineFrame));
            state.overlay = None;
            state.phase = EmbedPhase::Embedded;
        });
        tracing::debug!(attempt = %id, %url, "frame load won the race");
    }

    /// Deliver the site directly to a new tab, no attempt lifecycle.
    pub async fn open_in_new_tab(&self, url: String) {
        self.state.update(|state| {
            state.status = StatusLine::new("Opening in a new tab", StatusTone::Neutral);
            state.site_info = Some(SiteInfo::new(url.clone(), Delivery::NewTab));
        });
        self.tabs.open_tab(&url);
    }

    /// Snapshot of the attempt currently being tracked, if any.
    pub async fn current_attempt(&self) -> Option<EmbedAttempt> {
        self.current.lock().await.as_ref().map(|a| a.attempt.clone())
    }

    async fn run_embed_timer(&self, id: AttemptId) {
        tokio::time::sleep(EMBED_TIMEOUT).await;

        let url = {
            let mut current = self.current.lock().await;
            match current.as_mut() {
                Some(active) if active.attempt.id == id && !active.attempt.loaded => {
                    active.attempt.timed_out = true;
                    active.attempt.target_url.clone()
                }
                _ => {
                    tracing::debug!(attempt = %id, "embed timer fired for a superseded or resolved attempt");
                    return;
                }
            }
        };

        tracing::warn!(attempt = %id, %url, "no load signal within {:?}, falling back to a new tab", EMBED_TIMEOUT);
        self.state.update(|state| {
            state.status = StatusLine::new(
                "Embedding refused, opening in a new tab",
                StatusTone::Danger,
            );
            state.site_info = Some(SiteInfo::new(url.clone(), Delivery::NewTab));
            state.overlay = Some(FALLBACK_NOTICE_TEXT.to_string());
            state.phase = EmbedPhase::FallbackPending;
        });

        // Keep the notice on screen briefly before opening the tab.
        tokio::time::sleep(FALLBACK_NOTICE_DELAY).await;

        {
            let current = self.current.lock().await;
            match current.as_ref() {
                Some(active) if active.attempt.id == id => {}
                _ => {
                    tracing::debug!(attempt = %id, "fallback open cancelled by a newer attempt");
                    return;
                }
            }
        }

        self.tabs.open_tab(&url);
        self.state.update(|state| {
            state.overlay = None;
            state.phase = EmbedPhase::FallbackOpened;
        });
    }
}
