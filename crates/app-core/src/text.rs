//! Text helpers for safe display
//!
//! User-supplied URLs end up rendered inside the site-info line, so
//! they are escaped before being interpolated into markup and may be
//! shortened for display.

use unicode_segmentation::UnicodeSegmentation;

/// Escape text for inclusion in HTML markup.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with their entities so that a
/// URL containing markup renders as inert text.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Shorten text to at most `max_graphemes` visible glyphs, keeping the
/// head and tail around an ellipsis.
///
/// Operates on grapheme clusters so multi-byte input (IDN hosts, emoji
/// in query strings) is never split mid-glyph.
pub fn truncate_middle(text: &str, max_graphemes: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max_graphemes {
        return text.to_string();
    }
    if max_graphemes <= 1 {
        return "\u{2026}".to_string();
    }

    let head = max_graphemes / 2;
    let tail = max_graphemes - head - 1;
    format!(
        "{}\u{2026}{}",
        graphemes[..head].concat(),
        graphemes[graphemes.len() - tail..].concat()
    )
}
