//! Random image panel state

use serde::{Deserialize, Serialize};

/// Placeholder text shown when an image fails to load.
pub const IMAGE_PLACEHOLDER_TEXT: &str = "Failed to load the image";

/// State of the image slot inside the image panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ImageSlot {
    /// Nothing requested yet
    Empty,
    /// An image request is in flight
    Loading {
        /// URL being fetched
        url: String,
    },
    /// The image is displayed
    Loaded {
        /// URL of the displayed image
        url: String,
    },
    /// The request failed; the placeholder is displayed
    Failed,
}

impl ImageSlot {
    /// URL associated with the slot, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageSlot::Loading { url } | ImageSlot::Loaded { url } => Some(url),
            ImageSlot::Empty | ImageSlot::Failed => None,
        }
    }

    /// Whether a request is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, ImageSlot::Loading { .. })
    }
}

impl Default for ImageSlot {
    fn default() -> Self {
        ImageSlot::Empty
    }
}
