//! Search redirect
//!
//! The search form never renders results itself: it concatenates the
//! query onto the chosen engine's base URL and opens that in a new tab.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::embed::TabOpener;

/// Supported search engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    /// DuckDuckGo
    DuckDuckGo,
    /// Google
    Google,
    /// Bing
    Bing,
}

impl SearchEngine {
    /// Base URL the query gets appended to.
    pub fn base_url(&self) -> &'static str {
        match self {
            SearchEngine::DuckDuckGo => "https://duckduckgo.com/?q=",
            SearchEngine::Google => "https://www.google.com/search?q=",
            SearchEngine::Bing => "https://www.bing.com/search?q=",
        }
    }

    /// Label shown in the engine selector.
    pub fn label(&self) -> &'static str {
        match self {
            SearchEngine::DuckDuckGo => "DuckDuckGo",
            SearchEngine::Google => "Google",
            SearchEngine::Bing => "Bing",
        }
    }
}

/// Build the search URL for a query.
///
/// The query is trimmed and percent-encoded; a whitespace-only query
/// yields `None` and no tab should be opened for it.
pub fn build_query_url(engine: SearchEngine, query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!("{}{}", engine.base_url(), urlencoding::encode(query)))
}

/// Opens search queries in a new tab.
pub struct SearchRedirect {
    tabs: Arc<dyn TabOpener>,
}

impl SearchRedirect {
    /// Create a redirect service over the tab opener seam.
    pub fn new(tabs: Arc<dyn TabOpener>) -> Self {
        Self { tabs }
    }

    /// Submit the search form. Returns whether a tab was opened.
    pub fn submit(&self, engine: SearchEngine, query: &str) -> bool {
        match build_query_url(engine, query) {
            Some(url) => {
                tracing::debug!(%url, "opening search in a new tab");
                self.tabs.open_tab(&url);
                true
            }
            None => false,
        }
    }
}
