//! Prism Viewer
//!
//! A client-rendered site viewer: enter a URL, try to show it in an
//! inline frame, and fall back to a new browser tab when the frame
//! never signals a load. A search-redirect form and a random-image
//! panel share the page.
//!
//! The [`App`] facade wires the core services to a platform host and
//! exposes the entry points a rendering shell calls: one method per
//! user interaction, one per platform signal, and a view-model
//! snapshot for rendering.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::sync::Arc;

use app_core::embed::{EmbedController, EmbedError, FrameHost, TabOpener};
use app_core::images::RandomImageService;
use app_core::search::{SearchEngine, SearchRedirect};
use app_platform::{AlertPresenter, EventReceiver, PlatformEvent};
use app_state::StateHandle;
use app_ui::ViewModel;

/// Alert shown when an open action is requested without a URL.
pub const EMPTY_URL_ALERT: &str = "Please enter a URL.";

/// The wired-up viewer application.
#[derive(Clone)]
pub struct App {
    state: StateHandle,
    controller: EmbedController,
    search: Arc<SearchRedirect>,
    images: RandomImageService,
    alerts: Arc<dyn AlertPresenter>,
}

impl App {
    /// Wire the application over the given platform seams.
    pub fn new(
        frame: Arc<dyn FrameHost>,
        tabs: Arc<dyn TabOpener>,
        alerts: Arc<dyn AlertPresenter>,
    ) -> Self {
        let state = StateHandle::new();
        Self {
            controller: EmbedController::new(state.clone(), frame, tabs.clone()),
            search: Arc::new(SearchRedirect::new(tabs)),
            images: RandomImageService::new(state.clone()),
            alerts,
            state,
        }
    }

    /// Shared view state handle.
    pub fn state(&self) -> &StateHandle {
        &self.state
    }

    /// Snapshot of everything the shell renders.
    pub fn view_model(&self) -> ViewModel {
        ViewModel::from_state(&self.state.snapshot())
    }

    /// The open button: embed when the toggle is on, otherwise a new
    /// tab. Empty input raises the blocking alert instead.
    pub async fn open_clicked(&self, input: &str, try_embed: bool) {
        match self.controller.open(input, try_embed).await {
            Ok(()) => {}
            Err(EmbedError::EmptyInput) => self.alerts.alert(EMPTY_URL_ALERT),
        }
    }

    /// Enter in the URL field behaves exactly like the open button.
    pub async fn url_enter_pressed(&self, input: &str, try_embed: bool) {
        self.open_clicked(input, try_embed).await;
    }

    /// The always-new-tab button, regardless of the embed toggle.
    pub async fn open_new_clicked(&self, input: &str) {
        match self.controller.open(input, false).await {
            Ok(()) => {}
            Err(EmbedError::EmptyInput) => self.alerts.alert(EMPTY_URL_ALERT),
        }
    }

    /// Submit the search form. Returns whether a tab was opened.
    pub fn search_submitted(&self, engine: SearchEngine, query: &str) -> bool {
        self.search.submit(engine, query)
    }

    /// Toggle the image panel.
    pub fn set_images_panel_visible(&self, visible: bool) {
        self.images.set_panel_visible(visible);
    }

    /// The random image button. Returns the URL the shell should fetch.
    pub fn random_image_clicked(&self) -> String {
        self.images.request()
    }

    /// Dispatch one platform signal.
    pub async fn handle_event(&self, event: PlatformEvent) {
        match event {
            PlatformEvent::FrameLoaded(attempt) => self.controller.frame_loaded(attempt).await,
            PlatformEvent::ImageLoaded(url) => self.images.image_loaded(&url),
            PlatformEvent::ImageFailed(url) => self.images.image_failed(&url),
        }
    }

    /// Pump platform signals until the channel closes.
    pub async fn run(&self, mut events: EventReceiver) {
        while let Some(event) = events.recv().await {
            self.handle_event(event).await;
        }
        tracing::debug!("platform event channel closed");
    }
}
