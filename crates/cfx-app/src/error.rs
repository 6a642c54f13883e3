//! Application-level errors.
//!
//! User-facing variants display their message verbatim; the shell prints
//! them inline and keeps running.

use cfx_backend::BackendError;
use cfx_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Form input rejected before any network call.
    #[error("{0}")]
    Validation(String),

    /// The backend refused or could not be reached.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// The AI gateway returned its failure sentinel.
    #[error("{0}")]
    Ai(String),

    /// An AI request was cancelled; nothing was applied.
    #[error("request cancelled")]
    Cancelled,

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AppError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
