//! View model for Prism Viewer
//!
//! This crate turns the shared viewer state into the serializable
//! props a webview shell renders: the prefixed status line with its
//! display color, the site-info HTML line, and the control props for
//! the search form and image panel.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod controls;
pub mod render;

// Re-export commonly used types
pub use controls::{engine_options, EngineOption, ImagePanelProps};
pub use render::{site_info_html, status_color, status_text, ViewModel};
