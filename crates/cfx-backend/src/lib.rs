//! # cfx-backend
//!
//! HTTP client for the CrowdFix REST backend:
//! - `POST /api/signup` creates an account
//! - `POST /api/issues` mirrors a newly reported issue
//! - `GET /api/issues` lists issues known to the backend
//!
//! The application only talks to the backend through the [`AccountService`]
//! and [`IssueSink`] traits, so flows can run with no backend configured.

pub mod issues;
pub mod signup;

mod error;
mod http;

pub use error::BackendError;
pub use http::{error_message, success_message};
pub use issues::{NewIssueRequest, RemoteId, RemoteIssue};
pub use signup::SignupRequest;

use std::future::Future;
use std::time::Duration;

use cfx_config::BackendConfig;
use cfx_core::entities::Issue;

/// Shown when signup fails without a usable server message.
pub const SIGNUP_FALLBACK: &str = "Something went wrong";
/// Shown when issue submission fails without a usable server message.
pub const SUBMIT_FALLBACK: &str = "Failed to submit the issue.";
/// Shown when issue submission succeeds without a server message.
pub const SUBMIT_SUCCESS: &str = "Issue reported successfully!";
/// Shown when signup succeeds without a server message.
pub const SIGNUP_SUCCESS: &str = "Account created.";

// ── Seams ──────────────────────────────────────────────────────────

/// Creates user accounts.
pub trait AccountService: Sync {
    /// Register an account, returning the server's confirmation message.
    fn signup(
        &self,
        request: &SignupRequest,
    ) -> impl Future<Output = Result<String, BackendError>> + Send;
}

/// Receives newly reported issues.
pub trait IssueSink: Sync {
    /// Persist `issue`, returning the server's confirmation message.
    fn create_issue(&self, issue: &Issue)
    -> impl Future<Output = Result<String, BackendError>> + Send;
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for one backend base URL.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("crowdfix/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from the `[backend]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Http`] if the HTTP client fails to build.
    pub fn from_config(config: &BackendConfig) -> Result<Self, BackendError> {
        Self::new(&config.url, Duration::from_secs(config.timeout_secs))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl AccountService for BackendClient {
    async fn signup(&self, request: &SignupRequest) -> Result<String, BackendError> {
        self.post_signup(request).await
    }
}

impl IssueSink for BackendClient {
    async fn create_issue(&self, issue: &Issue) -> Result<String, BackendError> {
        self.post_issue(&NewIssueRequest::from(issue)).await
    }
}
