//! Search redirect and image panel scenarios

use std::sync::Arc;

use app_core::search::SearchEngine;
use app_platform::{event_channel, HeadlessFrame, PlatformEvent, RecordingAlerts, RecordingTabs};
use app_state::ImageSlot;
use prism_viewer::App;

fn app_with_tabs() -> (App, Arc<RecordingTabs>) {
    let (tx, _rx) = event_channel();
    let frame = Arc::new(HeadlessFrame::new(tx));
    let tabs = Arc::new(RecordingTabs::new());
    let alerts = Arc::new(RecordingAlerts::new());
    (App::new(frame, tabs.clone(), alerts), tabs)
}

#[tokio::test]
async fn test_search_opens_encoded_query_in_new_tab() {
    let (app, tabs) = app_with_tabs();

    assert!(app.search_submitted(SearchEngine::DuckDuckGo, "rust viewer"));
    assert_eq!(tabs.opened(), ["https://duckduckgo.com/?q=rust%20viewer"]);
}

#[tokio::test]
async fn test_whitespace_query_opens_nothing() {
    let (app, tabs) = app_with_tabs();

    assert!(!app.search_submitted(SearchEngine::Google, "   "));
    assert!(!app.search_submitted(SearchEngine::Bing, ""));
    assert!(tabs.opened().is_empty());
}

#[tokio::test]
async fn test_image_panel_starts_hidden_and_toggles() {
    let (app, _) = app_with_tabs();

    assert!(!app.view_model().image_panel.visible);

    app.set_images_panel_visible(true);
    assert!(app.view_model().image_panel.visible);

    app.set_images_panel_visible(false);
    assert!(!app.view_model().image_panel.visible);
}

#[tokio::test]
async fn test_random_image_lifecycle() {
    let (app, _) = app_with_tabs();

    let url = app.random_image_clicked();
    assert!(url.starts_with("https://picsum.photos/1200/700?random="));
    assert_eq!(
        app.state().snapshot().image,
        ImageSlot::Loading { url: url.clone() }
    );

    app.handle_event(PlatformEvent::ImageLoaded(url.clone())).await;
    assert_eq!(app.state().snapshot().image, ImageSlot::Loaded { url });
}

#[tokio::test]
async fn test_image_failure_shows_placeholder() {
    let (app, _) = app_with_tabs();

    let url = app.random_image_clicked();
    app.handle_event(PlatformEvent::ImageFailed(url)).await;

    assert_eq!(app.state().snapshot().image, ImageSlot::Failed);
    let panel = app.view_model().image_panel;
    assert_eq!(panel.image, ImageSlot::Failed);
    assert!(!panel.placeholder_text.is_empty());
}

#[tokio::test]
async fn test_stale_image_outcome_is_ignored() {
    let (app, _) = app_with_tabs();

    let first = app.random_image_clicked();
    // Cache busters are random; make sure the second request is distinct.
    let second = loop {
        let url = app.random_image_clicked();
        if url != first {
            break url;
        }
    };

    app.handle_event(PlatformEvent::ImageFailed(first)).await;
    assert_eq!(
        app.state().snapshot().image,
        ImageSlot::Loading { url: second.clone() }
    );

    app.handle_event(PlatformEvent::ImageLoaded(second.clone())).await;
    assert_eq!(app.state().snapshot().image, ImageSlot::Loaded { url: second });
}

#[tokio::test]
async fn test_view_model_carries_page_chrome() {
    let (app, _) = app_with_tabs();

    let model = app.view_model();
    assert_eq!(model.status_text, "Status: Waiting");
    assert_eq!(model.engines.len(), 3);
    assert_eq!(model.engines[0].label, "DuckDuckGo");
    assert!(model.footer_year >= 2024);
}
