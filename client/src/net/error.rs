//! REST failure taxonomy and user-facing message normalization.
//!
//! ERROR HANDLING
//! ==============
//! Transport code produces a typed [`ApiError`]; UI code only ever sees the
//! string from [`error_message`], so backend error shapes never leak into
//! components.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Longest plain-text body accepted as a backend message.
const MAX_PLAIN_MESSAGE_LEN: usize = 200;

/// A failed REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("HTTP requests are only available in the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a non-2xx response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Status { status, message: backend_message(body) }
    }
}

/// Human-readable message for any API failure.
pub fn error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { message: Some(message), .. } => message.clone(),
        ApiError::Status { status, message: None } => status_message(*status),
        ApiError::Network(_) => "Unable to reach the server. Check your connection and try again.".to_owned(),
        ApiError::Decode(_) => "The server returned an unexpected response.".to_owned(),
        ApiError::Unavailable => "This action is only available in the browser.".to_owned(),
    }
}

fn status_message(status: u16) -> String {
    match status {
        400 => "The request was invalid.".to_owned(),
        401 => "Your session has expired. Please sign in again.".to_owned(),
        403 => "You do not have permission to perform this action.".to_owned(),
        404 => "The requested resource was not found.".to_owned(),
        409 => "This change conflicts with the current state.".to_owned(),
        500..=599 => "The server encountered an error. Please try again later.".to_owned(),
        other => format!("Request failed with status {other}."),
    }
}

/// Extract the backend's own explanation from an error body.
///
/// Probes JSON `message`, `error`, `detail`, then `title`. Message arrays
/// (validation errors) are joined. Short non-HTML plain text is used verbatim.
pub fn backend_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => ["message", "error", "detail", "title"]
            .iter()
            .find_map(|key| map.get(*key).and_then(message_text)),
        Ok(Value::String(s)) => non_empty(&s),
        Ok(_) => None,
        Err(_) if !trimmed.starts_with('<') && trimmed.len() <= MAX_PLAIN_MESSAGE_LEN => Some(trimmed.to_owned()),
        Err(_) => None,
    }
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s),
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).filter(|s| !s.trim().is_empty()).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        Value::Object(inner) => inner.get("message").and_then(message_text),
        _ => None,
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_owned())
}
