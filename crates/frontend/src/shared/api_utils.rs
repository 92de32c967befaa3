//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API and media URLs.

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
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

/// Build a full API URL from a path
///
/// # Example
/// ```rust
/// let url = api_url("/esg/supplier/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Resolve a server-relative media path against the media base URL.
///
/// Certificates are addressed by relative paths like
/// `media/esg/environment/audit.pdf`; each segment is percent-encoded so
/// filenames with spaces survive the round trip.
pub fn media_url(path: &str) -> String {
    format!("{}/{}", api_base(), encode_media_path(path))
}

pub fn encode_media_path(path: &str) -> String {
    path.trim_start_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_path_segments_are_encoded() {
        assert_eq!(
            encode_media_path("media/esg/annual report 2025.pdf"),
            "media/esg/annual%20report%202025.pdf"
        );
    }

    #[test]
    fn leading_slash_is_dropped() {
        assert_eq!(encode_media_path("/media/a.pdf"), "media/a.pdf");
    }
}
