//! Runtime Configuration
//!
//! Resolves the API origin, WebSocket origin and map-tile token from
//! compile-time environment variables with a localStorage override for the
//! API base, so a deployed bundle can be pointed at another backend without
//! rebuilding.

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// localStorage key for the API base override
const API_BASE_KEY: &str = "badgeup_api_url";

/// Get the API base URL: localStorage override, then build-time
/// `BADGEUP_API_URL`, then the default.
pub fn api_base() -> String {
    let url = stored_override()
        .or_else(|| option_env!("BADGEUP_API_URL").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    normalize_base(&url)
}

/// Set the API base URL override in local storage
pub fn set_api_base(url: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_BASE_KEY, url);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = url;
}

// localStorage is only reachable in the browser; native builds (unit tests)
// fall through to the build-time value.
#[cfg(target_arch = "wasm32")]
fn stored_override() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
}

#[cfg(not(target_arch = "wasm32"))]
fn stored_override() -> Option<String> {
    None
}

/// Host serving media files: the API base with its `/api` suffix stripped.
pub fn api_host() -> String {
    strip_api_suffix(&api_base())
}

/// Get the WebSocket base URL: build-time `BADGEUP_WS_URL`, or derived from
/// the API base (scheme upgraded to its encrypted variant when the API is
/// served encrypted).
pub fn ws_base() -> String {
    option_env!("BADGEUP_WS_URL")
        .map(|url| normalize_base(url))
        .unwrap_or_else(|| derive_ws_base(&api_base()))
}

/// Optional map-tile token for the captures map. Without it the map page
/// falls back to a list-only view.
pub fn mapbox_token() -> Option<String> {
    option_env!("BADGEUP_MAPBOX_TOKEN")
        .map(str::to_string)
        .filter(|t| !t.is_empty())
}

/// Normalize: remove trailing slash
pub fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Strip a trailing `/api` segment to recover the bare host origin.
pub fn strip_api_suffix(base: &str) -> String {
    let base = base.trim_end_matches('/');
    base.strip_suffix("/api").unwrap_or(base).to_string()
}

/// Derive a WebSocket origin from an HTTP API base.
pub fn derive_ws_base(api_base: &str) -> String {
    let host = strip_api_suffix(api_base);
    if let Some(rest) = host.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = host.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else {
        host.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_defaults_without_browser_context() {
        // outside a browser the localStorage override is inert
        set_api_base("http://elsewhere.example/api");
        assert_eq!(api_base(), DEFAULT_API_BASE);
    }

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(normalize_base("http://localhost:8000/api/"), "http://localhost:8000/api");
        assert_eq!(normalize_base("http://localhost:8000/api"), "http://localhost:8000/api");
    }

    #[test]
    fn test_strip_api_suffix() {
        assert_eq!(strip_api_suffix("http://localhost:8000/api"), "http://localhost:8000");
        assert_eq!(strip_api_suffix("http://localhost:8000"), "http://localhost:8000");
        assert_eq!(strip_api_suffix("https://badgeup.example/api/"), "https://badgeup.example");
    }

    #[test]
    fn test_derive_ws_base_plain() {
        assert_eq!(derive_ws_base("http://localhost:8000/api"), "ws://localhost:8000");
    }

    #[test]
    fn test_derive_ws_base_encrypted() {
        assert_eq!(derive_ws_base("https://badgeup.example/api"), "wss://badgeup.example");
    }
}
