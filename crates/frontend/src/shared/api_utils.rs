//! API utilities for frontend-backend communication

/// Base URL derived from the current window location, using port 3000 for
/// the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn window_api_base() -> String {
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

/// Query string for list endpoints; `serde_qs` drops `None` search values
pub fn list_query(page: usize, size: usize, search: Option<&str>) -> String {
    #[derive(serde::Serialize)]
    struct ListQuery<'a> {
        page: usize,
        size: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        search: Option<&'a str>,
    }

    let search = search.map(str::trim).filter(|s| !s.is_empty());
    serde_qs::to_string(&ListQuery { page, size, search }).unwrap_or_default()
}
