//! URL normalization

use regex::Regex;
use std::sync::OnceLock;

/// Normalize raw user input into an absolute URL.
///
/// Trims surrounding whitespace; empty input yields `None`. Input that
/// already carries an `http://` or `https://` scheme (case-insensitive)
/// passes through unchanged; anything else gets an `https://` prefix.
/// No further validation happens here — malformed host names pass
/// through unchecked.
pub fn normalize_url(raw: &str) -> Option<String> {
    static SCHEME_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = SCHEME_REGEX.get_or_init(|| Regex::new(r"(?i)^https?://").unwrap());

    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if re.is_match(raw) {
        Some(raw.to_string())
    } else {
        Some(format!("https://{}", raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepends_https_when_scheme_missing() {
        assert_eq!(
            normalize_url("example.com"),
            Some("https://example.com".to_string())
        );
        assert_eq!(
            normalize_url("example.com/path?q=1"),
            Some("https://example.com/path?q=1".to_string())
        );
    }

    #[test]
    fn test_existing_scheme_is_identity() {
        assert_eq!(
            normalize_url("https://example.com"),
            Some("https://example.com".to_string())
        );
        assert_eq!(
            normalize_url("http://example.com"),
            Some("http://example.com".to_string())
        );
        assert_eq!(
            normalize_url("HTTPS://EXAMPLE.COM"),
            Some("HTTPS://EXAMPLE.COM".to_string())
        );
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(
            normalize_url("  example.com  "),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_empty_input_is_none() {
        assert_eq!(normalize_url(""), None);
        assert_eq!(normalize_url("   "), None);
    }

    #[test]
    fn test_malformed_hosts_pass_through() {
        // Deliberately unvalidated beyond the scheme check.
        assert_eq!(
            normalize_url("not a url"),
            Some("https://not a url".to_string())
        );
    }
}
