//! Control props for the page's interactive elements

use serde::{Deserialize, Serialize};

use app_core::search::SearchEngine;
use app_state::images::IMAGE_PLACEHOLDER_TEXT;
use app_state::ImageSlot;

/// One entry of the search-engine selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineOption {
    /// Value submitted with the form
    pub value: SearchEngine,
    /// Label shown to the user
    pub label: String,
}

/// All selector entries, in display order.
pub fn engine_options() -> Vec<EngineOption> {
    [SearchEngine::DuckDuckGo, SearchEngine::Google, SearchEngine::Bing]
        .into_iter()
        .map(|engine| EngineOption {
            value: engine,
            label: engine.label().to_string(),
        })
        .collect()
}

/// Props of the random image panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePanelProps {
    /// Whether the panel is shown at all
    pub visible: bool,
    /// Current slot contents
    pub image: ImageSlot,
    /// Text rendered when the slot is in the failed state
    pub placeholder_text: String,
}

impl ImagePanelProps {
    /// Build panel props from the state fields.
    pub fn new(visible: bool, image: ImageSlot) -> Self {
        Self {
            visible,
            image,
            placeholder_text: IMAGE_PLACEHOLDER_TEXT.to_string(),
        }
    }
}
