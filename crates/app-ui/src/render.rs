//! Rendering helpers and the page view model

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use app_core::text::{escape_html, truncate_middle};
use app_state::{EmbedPhase, SiteInfo, StatusLine, ViewerState};

use crate::controls::{engine_options, EngineOption, ImagePanelProps};

/// Longest URL shown verbatim in the site-info line; longer ones are
/// shortened around an ellipsis.
pub const MAX_DISPLAY_URL_GRAPHEMES: usize = 80;

/// Status line text as rendered, with its fixed prefix.
pub fn status_text(status: &StatusLine) -> String {
    format!("Status: {}", status.text)
}

/// CSS color for the status line.
pub fn status_color(status: &StatusLine) -> &'static str {
    status.tone.display_color()
}

/// The site-info line as an HTML fragment.
///
/// The URL is user input and gets escaped, so markup smuggled into it
/// renders as inert text.
pub fn site_info_html(info: &SiteInfo) -> String {
    format!(
        "<strong>Site:</strong> {} <br><strong>Delivery:</strong> {}",
        escape_html(&truncate_middle(&info.url, MAX_DISPLAY_URL_GRAPHEMES)),
        info.delivery.label()
    )
}

/// Everything the shell needs to render the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    /// Prefixed status line text
    pub status_text: String,
    /// Status text color ("" inherits the default)
    pub status_color: String,
    /// Site-info HTML fragment, absent until the first open action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_info_html: Option<String>,
    /// Overlay message over the frame area
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<String>,
    /// URL the inline frame points at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_url: Option<String>,
    /// Embed attempt phase
    pub phase: EmbedPhase,
    /// Image panel props
    pub image_panel: ImagePanelProps,
    /// Search engine selector entries
    pub engines: Vec<EngineOption>,
    /// Year shown in the footer
    pub footer_year: i32,
}

impl ViewModel {
    /// Build the view model from a state snapshot.
    pub fn from_state(state: &ViewerState) -> Self {
        Self {
            status_text: status_text(&state.status),
            status_color: status_color(&state.status).to_string(),
            site_info_html: state.site_info.as_ref().map(site_info_html),
            overlay: state.overlay.clone(),
            frame_url: state.frame_url.clone(),
            phase: state.phase,
            image_panel: ImagePanelProps::new(state.images_panel_visible, state.image.clone()),
            engines: engine_options(),
            footer_year: Utc::now().year(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_state::{Delivery, StatusTone};

    #[test]
    fn test_status_rendering() {
        let status = StatusLine::new("Loading...", StatusTone::Busy);
        assert_eq!(status_text(&status), "Status: Loading...");
        assert_eq!(status_color(&status), "orange");
    }

    #[test]
    fn test_site_info_html_escapes_url() {
        let info = SiteInfo::new("https://example.com/<script>alert(1)</script>", Delivery::InlineFrame);
        let html = site_info_html(&info);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("inline frame"));
    }

    #[test]
    fn test_site_info_html_shortens_long_urls() {
        let long_url = format!("https://example.com/{}", "a".repeat(200));
        let info = SiteInfo::new(long_url, Delivery::NewTab);
        let html = site_info_html(&info);
        assert!(html.contains('\u{2026}'));
        assert!(html.contains("new tab"));
    }

    #[test]
    fn test_view_model_from_default_state() {
        let model = ViewModel::from_state(&ViewerState::default());
        assert_eq!(model.status_text, "Status: Waiting");
        assert_eq!(model.status_color, "");
        assert!(model.site_info_html.is_none());
        assert!(model.overlay.is_none());
        assert_eq!(model.phase, EmbedPhase::Idle);
        assert!(!model.image_panel.visible);
        assert_eq!(model.engines.len(), 3);
        assert!(model.footer_year >= 2024);
    }

    #[test]
    fn test_view_model_serialization() {
        let model = ViewModel::from_state(&ViewerState::default());
        let json = serde_json::to_string(&model).unwrap();
        assert!(json.contains("\"statusText\":\"Status: Waiting\""));
        assert!(!json.contains("siteInfoHtml"));
    }
}
