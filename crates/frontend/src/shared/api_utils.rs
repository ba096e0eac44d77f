//! API utilities for frontend-backend communication
//!
//! Builds absolute URLs for the REST backend from the current window location.

/// Port the REST backend listens on.
pub const API_PORT: u16 = 8080;

/// Path prefix of every REST endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// Scheme, host and port of the backend, e.g. "http://localhost:8080".
///
/// Empty if window is not available (tests, SSR), which keeps URLs relative.
pub fn backend_origin() -> String {
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

/// Get the base URL for API requests, like "http://localhost:8080/api/v1"
pub fn api_base() -> String {
    format!("{}{}", backend_origin(), API_PREFIX)
}

/// Build a full API URL from a resource path such as `products?page=1&limit=5`.
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// URL of an uploaded file (product images).
pub fn upload_url(file_name: &str) -> String {
    join_url(&format!("{}/uploads", backend_origin()), file_name)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
