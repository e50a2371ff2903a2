//! Journey-planning API error types.

use super::convert::ConversionError;

/// Errors from the journey-planning HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Location search found no stop for the name
    #[error("no stop found for {query:?}")]
    StopNotFound { query: String },

    /// Response parsed but contains unusable journey data
    #[error("malformed journey data: {0}")]
    Conversion(#[from] ConversionError),
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref()
        .map(|body| format!(" (body: {body})"))
        .unwrap_or_default()
}
