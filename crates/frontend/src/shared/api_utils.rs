//! API utilities for frontend-backend communication

/// Port the backend listens on
const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Built from the current window location with the backend port.
/// Returns an empty string when no window is available, which leaves
/// request URLs relative.
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
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
