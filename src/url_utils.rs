//! URL Utility Functions
//!
//! Resolution of relative URLs (company logos) against the page URL.

use url::Url;

/// Check if a string is an absolute http(s) URL with a host.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }

    Url::parse(s).is_ok_and(|url| url.host().is_some())
}

/// Resolve `href` against `base`.
///
/// Empty, absolute and `data:` values are returned unchanged (trimmed), as
/// is everything when `base` is missing or unparseable.
#[must_use]
pub fn resolve(href: &str, base: Option<&str>) -> String {
    let href = href.trim();

    if href.is_empty() || href.starts_with("data:") || is_absolute_url(href) {
        return href.to_string();
    }

    let Some(base) = base.and_then(|b| Url::parse(b.trim()).ok()) else {
        return href.to_string();
    };

    match base.join(href) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://img.example.com/logo.png"));
        assert!(is_absolute_url("  http://example.com "));
        assert!(!is_absolute_url("/logo.png"));
        assert!(!is_absolute_url("//cdn.example.com/logo.png"));
        assert!(!is_absolute_url(""));
    }

    #[test]
    fn test_resolve_relative_against_base() {
        assert_eq!(
            resolve("/logos/acme.png", Some("https://profiles.example.com/u/42")),
            "https://profiles.example.com/logos/acme.png"
        );
        assert_eq!(
            resolve("//cdn.example.com/a.png", Some("https://profiles.example.com/")),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn test_resolve_without_base_is_identity() {
        assert_eq!(resolve("/logos/acme.png", None), "/logos/acme.png");
        assert_eq!(resolve("/logos/acme.png", Some("not a url")), "/logos/acme.png");
    }

    #[test]
    fn test_resolve_keeps_absolute_and_empty() {
        let base = Some("https://profiles.example.com/");
        assert_eq!(resolve("https://cdn.x/a.png", base), "https://cdn.x/a.png");
        assert_eq!(resolve("", base), "");
        assert_eq!(resolve("data:image/png;base64,AA", base), "data:image/png;base64,AA");
    }
}
