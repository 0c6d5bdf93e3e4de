//! Helpers for constructing backend API URLs.

/// Port the document-processing backend listens on.
const BACKEND_PORT: u16 = 8000;

/// Base URL for API requests.
///
/// Derived from the current window location (protocol and hostname) combined
/// with [`BACKEND_PORT`], so the frontend works against whatever host serves
/// it. Returns an empty string when no window is available.
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
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Full API URL for a backend route path.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
