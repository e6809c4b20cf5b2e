//! Post store client error types.

use thiserror::Error;

/// Errors that can occur when talking to the remote post store.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (includes timeouts and JSON body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The endpoint returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The store answered with `{"success": false}`.
    #[error("store rejected the request: {message}")]
    Unsuccessful { message: String },

    /// A request could not be built from the given input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
