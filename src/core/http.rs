//! HTTP utilities for balldontlie API communication

use crate::{Result, API_KEY_ENV_VAR, API_URI_ENV_VAR, DEFAULT_API_URI};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

/// Headers sent with every request.
///
/// Adds `Authorization` from `BALLDONTLIE_API_KEY` when it is set; the
/// legacy public API accepts anonymous requests.
pub fn common_headers() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));

    if let Ok(key) = std::env::var(API_KEY_ENV_VAR) {
        let key = key.trim();
        if !key.is_empty() {
            h.insert(AUTHORIZATION, HeaderValue::from_str(key)?);
        }
    }

    Ok(h)
}

/// Pick the API base: explicit flag, then `NBA_API_URI`, then the public default.
pub fn resolve_api_uri(flag: Option<String>) -> String {
    let uri = flag
        .or_else(|| std::env::var(API_URI_ENV_VAR).ok())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URI.to_string());

    uri.trim_end_matches('/').to_string()
}
