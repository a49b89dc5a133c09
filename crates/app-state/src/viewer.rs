//! Viewer page state
//!
//! Holds everything the shell needs to render the frame area: the
//! current embed phase, the frame target, the site-info line, and the
//! transient overlay message.

use serde::{Deserialize, Serialize};

use crate::images::ImageSlot;
use crate::status::StatusLine;

/// How a site is delivered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Delivery {
    /// Rendered inside the inline frame
    InlineFrame,
    /// Opened in a new browser tab
    NewTab,
}

impl Delivery {
    /// Human-readable label for the site-info line.
    pub fn label(&self) -> &'static str {
        match self {
            Delivery::InlineFrame => "inline frame",
            Delivery::NewTab => "new tab",
        }
    }
}

/// Site-info line contents: which site, delivered how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    /// The (normalized) target URL as the user requested it
    pub url: String,
    /// Delivery method
    pub delivery: Delivery,
}

impl SiteInfo {
    /// Create a site-info entry.
    pub fn new(url: impl Into<String>, delivery: Delivery) -> Self {
        Self {
            url: url.into(),
            delivery,
        }
    }
}

/// Lifecycle phase of the current embed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmbedPhase {
    /// No attempt in progress
    Idle,
    /// Frame navigation started, racing the load signal against the timer
    Loading,
    /// Load signal won; the site is shown inline
    Embedded,
    /// Timer won; the fallback notice is on screen
    FallbackPending,
    /// The fallback tab has been opened
    FallbackOpened,
}

impl EmbedPhase {
    /// Whether the attempt has reached a terminal phase.
    pub fn is_terminal(&self) -> bool {
        matches!(self, EmbedPhase::Embedded | EmbedPhase::FallbackOpened)
    }
}

/// Complete observable state of the viewer page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerState {
    /// Status line
    pub status: StatusLine,
    /// Site-info line, absent until the first open action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_info: Option<SiteInfo>,
    /// Transient message layered over the frame area
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<String>,
    /// URL the inline frame is pointed at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_url: Option<String>,
    /// Phase of the current embed attempt
    pub phase: EmbedPhase,
    /// Random image panel slot
    pub image: ImageSlot,
    /// Whether the image panel is shown
    pub images_panel_visible: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        // Mirrors the page's initial render: waiting status, hidden panel.
        Self {
            status: StatusLine::waiting(),
            site_info: None,
            overlay: None,
            frame_url: None,
            phase: EmbedPhase::Idle,
            image: ImageSlot::Empty,
            images_panel_visible: false,
        }
    }
}
