//! Backend error types.

use thiserror::Error;

/// Errors from the REST backend.
///
/// `Api` displays the server-provided message verbatim so it can be shown to
/// the user as-is.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP transport error.
    #[error("could not reach the backend: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("{message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// `detail` from the body, the raw body, or a per-call fallback.
        message: String,
    },

    /// Failed to parse a backend response.
    #[error("parse error: {0}")]
    Parse(String),
}
