//! # cfx-ai
//!
//! Client for the hosted generative-text endpoint used to enhance report
//! descriptions, summarize the issue list, and draft complaint letters.
//!
//! - [`AiGateway`] posts a prompt, extracts `candidates[0].content.parts[0].text`
//!   and retries failed attempts with exponential backoff ([`RetryPolicy`]).
//! - [`AiGateway::generate`] never fails: once retries are exhausted it returns
//!   [`FAILURE_SENTINEL`]. Callers check [`is_failure_sentinel`].
//! - [`CancelToken`] lets a caller abandon an in-flight request, including any
//!   pending backoff wait.
//! - [`prompts`] holds the prompt templates.

pub mod prompts;

mod cancel;
mod codec;
mod error;
mod gateway;
mod retry;
mod transport;

pub use cancel::{CancelHandle, CancelToken, cancel_pair};
pub use codec::{GenerateRequest, extract_text};
pub use error::AiError;
pub use gateway::{AiGateway, FAILURE_SENTINEL, TextGenerator, WithCancel, is_failure_sentinel};
pub use retry::RetryPolicy;
pub use transport::{HttpTransport, Transport};
