//! API utilities for frontend-backend communication
//!
//! Helpers for building API URLs, including paged table reads.

use contracts::shared::paging::PageRequest;

/// Get the base URL for API requests
///
/// Built from the current window location, using port 3000 for the backend.
/// Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// API URL for one page of a table
pub fn paged_api_url(path: &str, page: PageRequest) -> String {
    with_page(&api_url(path), page)
}

/// Append limit/offset query parameters to a URL
pub fn with_page(url: &str, page: PageRequest) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}limit={}&offset={}",
        url, separator, page.limit, page.offset
    )
}
