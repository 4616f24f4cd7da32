// src/probe/url.rs
// =============================================================================
// Small, pure helpers for the target URLs.
//
// - normalize_urls: makes sure every target has a scheme so reqwest can
//   actually request it ("github.com" -> "https://github.com")
// - domain_of: pulls the host out of a URL for the report's Domain column
//
// Neither function does any I/O and neither can fail - bad input just
// passes through in a usable form.
// =============================================================================

use url::Url;

/// Ensures each target starts with a scheme, defaulting to https.
///
/// Targets that already start with "http://" or "https://" pass through
/// untouched. Output has the same length and order as the input.
pub fn normalize_urls(urls: &[String]) -> Vec<String> {
    urls.iter()
        .map(|u| {
            if u.starts_with("http://") || u.starts_with("https://") {
                u.clone()
            } else {
                format!("https://{}", u)
            }
        })
        .collect()
}

/// Returns the host component of a URL, or the input verbatim if it has
/// none (or is not parseable as a URL at all).
pub fn domain_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prepends_https() {
        let normed = normalize_urls(&["weber.edu".to_string()]);
        assert_eq!(normed, vec!["https://weber.edu"]);
    }

    #[test]
    fn test_normalize_keeps_existing_schemes() {
        let input = vec![
            "http://example.com".to_string(),
            "https://example.com".to_string(),
        ];
        assert_eq!(normalize_urls(&input), input);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_urls(&["github.com".to_string()]);
        let twice = normalize_urls(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_preserves_order_and_length() {
        let input = vec![
            "b.example".to_string(),
            "a.example".to_string(),
            "b.example".to_string(),
        ];
        let normed = normalize_urls(&input);
        assert_eq!(
            normed,
            vec![
                "https://b.example",
                "https://a.example",
                "https://b.example"
            ]
        );
    }

    #[test]
    fn test_domain_of_extracts_host() {
        assert_eq!(domain_of("https://example.com/path"), "example.com");
        assert_eq!(domain_of("http://www.python.org"), "www.python.org");
    }

    #[test]
    fn test_domain_of_falls_back_to_input() {
        assert_eq!(domain_of("not a url"), "not a url");
        // Parses as a URL but has no host component
        assert_eq!(domain_of("mailto:test@example.com"), "mailto:test@example.com");
    }
}
