use thiserror::Error;

/// Failures surfaced by the API layer.
///
/// Views treat these uniformly (log + toast); only the sign-in path inspects
/// statuses, and it does so before generic mapping ever sees them.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, connect, timeout, TLS.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered outside the 2xx range.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The body did not match the declared contract for the endpoint.
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the encrypted token file failed.
    #[error("token store: {0}")]
    Token(String),
}

impl ApiError {
    /// The HTTP status for `Status` errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
