#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Errors surfaced by the REST layer.
///
/// Auth flows treat every variant the same way (fail closed); forms show
/// [`ApiError::server_message`] when the server provided one and fall back
/// to a generic string otherwise.
#[derive(Clone, Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("server rejected the request ({status}): {message}")]
    Server { status: u16, message: String },
    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Endpoint called outside the browser (server-side render).
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// The server-provided, user-facing message, if there is one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// Extract the user-facing message from an error response body.
///
/// The API reports errors as `{"message": "..."}`; anything else yields an
/// empty message and callers fall back to a generic string.
pub fn message_from_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(ToOwned::to_owned))
        .unwrap_or_default()
}
