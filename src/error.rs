use thiserror::Error;

/// Errors surfaced by [`crate::FoodsApi`].
///
/// The cart itself has no failure modes; everything here is about talking to
/// the remote API. Nothing is retried — callers report the failure and move
/// on.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response (DNS, connect, timeout,
    /// reading the body).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status. `message` is the server's `{ "error": ... }` field
    /// when it sent one, otherwise the raw body.
    #[error("{endpoint} returned {status}: {message}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
        message: String,
    },

    /// The response body was not the JSON shape this client expects.
    #[error("unexpected response from {endpoint}: {source}")]
    Parse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Missing or rejected bearer token. Callers should send the user back
    /// through login instead of showing a generic failure.
    #[error("not authenticated")]
    Unauthenticated,
}

impl ApiError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthenticated)
    }
}
