//! Structural validation of submitted URLs.

use url::Url;

/// Returns `true` if `candidate` is an absolute URL with a scheme and a host.
///
/// Parse failures are reported as `false`, never as errors. Relative paths,
/// empty strings and host-less URLs such as `mailto:` are rejected.
///
/// Candidates with control characters or surrounding whitespace are rejected
/// too: the parser would silently strip them, but the URL is stored verbatim
/// and must later fit in a `Location` header.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_url("https://www.example.com/a"));
/// assert!(!is_valid_url("not-a-valid-url"));
/// assert!(!is_valid_url(""));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    if candidate.trim() != candidate || candidate.chars().any(|c| c.is_control()) {
        return false;
    }

    match Url::parse(candidate) {
        Ok(url) => !url.scheme().is_empty() && url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}
