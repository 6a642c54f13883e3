//! AI gateway error types.
//!
//! These never reach callers of [`crate::AiGateway::generate`], which collapses
//! them into the failure sentinel. They are exposed through `try_generate` and
//! in logs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    /// HTTP transport error (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// Response JSON did not carry generated text.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Every attempt failed.
    #[error("AI request failed after {attempts} attempt(s): {last}")]
    Exhausted {
        attempts: u32,
        #[source]
        last: Box<AiError>,
    },

    #[error("AI request cancelled")]
    Cancelled,
}
