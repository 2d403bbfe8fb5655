//! Link-header next-URL extraction
//!
//! Header format: `<https://host/users?after=abc&limit=200>; rel="next",
//! <https://host/users?limit=200>; rel="self"`: one or more comma-separated
//! entries, each a bracketed target followed by `"; "`-separated parameters.

use reqwest::header::{HeaderMap, LINK};

const NEXT_SUFFIX: &str = r#"rel="next""#;

/// Extract the `rel="next"` target from a single `Link` header value.
///
/// Splits the value on commas; the first entry whose trailing content is
/// exactly `rel="next"` wins. The target is the substring before the first
/// `"; "` separator with the surrounding angle brackets removed. `None` when
/// no entry matches, including the zero-entry case.
pub fn extract_next_url(header_value: &str) -> Option<String> {
    for entry in header_value.split(',') {
        if entry.trim_end().ends_with(NEXT_SUFFIX) {
            let target = entry.split("; ").next().unwrap_or(entry);
            return Some(
                target
                    .trim()
                    .trim_start_matches('<')
                    .trim_end_matches('>')
                    .to_string(),
            );
        }
    }
    None
}

/// Scan every `Link` header occurrence in order and return the winning
/// `rel="next"` target.
///
/// The last occurrence containing a match determines the next URL (later
/// overwrites earlier). An occurrence with no `rel="next"` entry leaves an
/// earlier match in place.
pub fn next_url_from_headers(headers: &HeaderMap) -> Option<String> {
    let mut next = None;
    for value in headers.get_all(LINK) {
        if let Ok(value) = value.to_str() {
            if let Some(url) = extract_next_url(value) {
                next = Some(url);
            }
        }
    }
    next
}
