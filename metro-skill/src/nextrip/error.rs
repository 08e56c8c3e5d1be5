//! NexTrip client error types.

/// Errors from the NexTrip HTTP client.
///
/// Every variant means the upstream was unavailable or unusable for this
/// request; callers turn all of them into the same user-facing apology.
#[derive(Debug, thiserror::Error)]
pub enum NexTripError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not valid JSON for the expected shape
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}
