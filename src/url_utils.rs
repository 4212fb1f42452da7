//! URL Utility Functions
//!
//! Canonicalizes user input into a fetchable URL, derives the display domain
//! and resolves relative image/favicon references against the page's domain.

use url::Url;

use crate::error::{Error, Result};

/// Make `input` fetchable by prefixing `http://` when it has no scheme.
///
/// The check is a plain substring test for `http`; nothing else is
/// validated. Malformed input surfaces later as an invalid-input or fetch
/// failure.
///
/// # Examples
/// ```
/// use pagegrab::url_utils::normalize;
///
/// assert_eq!(normalize("example.com"), "http://example.com");
/// assert_eq!(normalize("https://example.com"), "https://example.com");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    if input.contains("http") {
        input.to_string()
    } else {
        format!("http://{input}")
    }
}

/// Display domain of `url`, or with `full` set, a fetchable base URL for it.
///
/// The host has one leading `www.` removed. With `full` the result is
/// `http://` followed by that host, with no path.
///
/// # Examples
/// ```
/// use pagegrab::url_utils::domain;
///
/// assert_eq!(domain("https://www.example.com/x", false)?, "example.com");
/// assert_eq!(domain("https://www.example.com/x", true)?, "http://example.com");
/// # Ok::<(), pagegrab::Error>(())
/// ```
pub fn domain(url: &str, full: bool) -> Result<String> {
    let host = host_of(url)?;
    let host = strip_www(&host);

    if full {
        Ok(format!("http://{host}"))
    } else {
        Ok(host.to_string())
    }
}

/// Host component of `url`.
pub fn host_of(url: &str) -> Result<String> {
    let parsed = Url::parse(url.trim()).map_err(|e| Error::InvalidInput(format!("{url}: {e}")))?;

    parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidInput(format!("{url}: missing host")))
}

/// Remove one leading `www.` from a host name.
#[must_use]
pub fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// Check if a string is a valid absolute http(s) URL with a host.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }

    Url::parse(s).is_ok_and(|url| url.host().is_some())
}

/// Resolve an image or favicon reference against the page's base URL.
///
/// `base` is the output of [`domain`] with `full` set. Absolute http(s)
/// references are returned unchanged; everything else is joined onto the
/// root of `base`, so `img/a.png` and `/img/a.png` both land at
/// `http://host/img/a.png`.
///
/// # Returns
/// * The absolute URL string, or empty if `reference` is blank
#[must_use]
pub fn resolve_against_domain(reference: &str, base: &str) -> String {
    let reference = reference.trim();

    if reference.is_empty() {
        return String::new();
    }

    if is_absolute_url(reference) {
        return reference.to_string();
    }

    let root = format!("{}/", base.trim_end_matches('/'));
    let Ok(base_url) = Url::parse(&root) else {
        return format!("{root}{}", reference.trim_start_matches('/'));
    };

    // Path-relative references resolve at the domain root.
    let joined = if reference.starts_with("//") {
        base_url.join(reference)
    } else {
        base_url.join(reference.trim_start_matches('/'))
    };

    match joined {
        Ok(resolved) => resolved.to_string(),
        Err(_) => format!("{root}{}", reference.trim_start_matches('/')),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prefixes_bare_host() {
        assert_eq!(normalize("example.com"), "http://example.com");
        assert_eq!(normalize("example.com/a?b=c"), "http://example.com/a?b=c");
    }

    #[test]
    fn test_normalize_keeps_schemed_input() {
        assert_eq!(normalize("https://example.com"), "https://example.com");
        assert_eq!(normalize("http://example.com/x"), "http://example.com/x");
    }

    #[test]
    fn test_normalize_is_substring_based() {
        // Anything containing "http" passes through untouched.
        assert_eq!(normalize("httpbin.org"), "httpbin.org");
    }

    #[test]
    fn test_domain_strips_www() {
        assert_eq!(domain("https://www.example.com/x", false).ok(), Some("example.com".to_string()));
        assert_eq!(domain("http://blog.example.com", false).ok(), Some("blog.example.com".to_string()));
    }

    #[test]
    fn test_domain_full_adds_scheme_without_path() {
        assert_eq!(
            domain("https://www.example.com/x", true).ok(),
            Some("http://example.com".to_string())
        );
    }

    #[test]
    fn test_domain_keeps_leading_w_letters() {
        assert_eq!(domain("http://wwwfoo.com", false).ok(), Some("wwwfoo.com".to_string()));
        assert_eq!(domain("http://web.dev", false).ok(), Some("web.dev".to_string()));
    }

    #[test]
    fn test_domain_rejects_hostless_input() {
        assert!(matches!(domain("not a url", false), Err(Error::InvalidInput(_))));
        assert!(matches!(domain("mailto:someone@example.com", false), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://example.com/path"));
        assert!(is_absolute_url("  http://example.com  "));
        assert!(!is_absolute_url("/relative/path"));
        assert!(!is_absolute_url("ftp://example.com"));
        assert!(!is_absolute_url(""));
        assert!(!is_absolute_url("http://"));
    }

    #[test]
    fn test_resolve_relative_references() {
        let base = "http://example.com";
        assert_eq!(resolve_against_domain("img/a.png", base), "http://example.com/img/a.png");
        assert_eq!(resolve_against_domain("/img/a.png", base), "http://example.com/img/a.png");
        assert_eq!(resolve_against_domain("favicon.ico", "http://example.com/"), "http://example.com/favicon.ico");
    }

    #[test]
    fn test_resolve_protocol_relative() {
        assert_eq!(
            resolve_against_domain("//cdn.example.net/a.png", "http://example.com"),
            "http://cdn.example.net/a.png"
        );
    }

    #[test]
    fn test_resolve_keeps_absolute() {
        assert_eq!(
            resolve_against_domain("https://cdn.example.net/a.png", "http://example.com"),
            "https://cdn.example.net/a.png"
        );
    }

    #[test]
    fn test_resolve_path_containing_http_word() {
        assert_eq!(
            resolve_against_domain("/img/http-logo.png", "http://example.com"),
            "http://example.com/img/http-logo.png"
        );
    }

    #[test]
    fn test_resolve_blank() {
        assert_eq!(resolve_against_domain("   ", "http://example.com"), "");
    }
}
