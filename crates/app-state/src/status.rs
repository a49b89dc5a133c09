//! Status line state
//!
//! The status line is a single short message with a tone. The shell
//! renders the tone as a text color; the mapping mirrors the page's
//! original palette.

use serde::{Deserialize, Serialize};

/// Tone of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    /// Informational, default text color
    Neutral,
    /// An operation is in progress
    Busy,
    /// The last operation succeeded
    Success,
    /// The last operation fell back or failed
    Danger,
}

impl StatusTone {
    /// CSS color the shell applies to the status text.
    ///
    /// An empty string means "inherit the default color".
    pub fn display_color(&self) -> &'static str {
        match self {
            StatusTone::Neutral => "",
            StatusTone::Busy => "orange",
            StatusTone::Success => "green",
            StatusTone::Danger => "crimson",
        }
    }
}

/// The observable status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusLine {
    /// Message text, without the "Status:" prefix the shell adds
    pub text: String,
    /// Display tone
    pub tone: StatusTone,
}

impl StatusLine {
    /// Create a status line.
    pub fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    /// Initial idle message shown before any interaction.
    pub fn waiting() -> Self {
        Self::new("Waiting", StatusTone::Neutral)
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::waiting()
    }
}
