//! Build-time client configuration.
//!
//! The REST base URL is baked into the bundle from `HOMEFIX_API_BASE_URL` at
//! compile time; browsers have no process environment to read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Configured REST base URL without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("HOMEFIX_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

/// Trim whitespace and trailing slashes; blank input falls back to the default.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}
