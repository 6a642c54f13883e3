//! The AI gateway: one prompt in, one piece of text out.

use std::future::Future;
use std::time::Duration;

use cfx_config::AiConfig;

use crate::cancel::CancelToken;
use crate::codec::{GenerateRequest, extract_text};
use crate::error::AiError;
use crate::retry::RetryPolicy;
use crate::transport::{HttpTransport, Transport};

/// Returned by [`AiGateway::generate`] once every attempt has failed.
pub const FAILURE_SENTINEL: &str = "Error: Unable to process the request with AI.";

/// `true` if `text` is the gateway failure sentinel.
#[must_use]
pub fn is_failure_sentinel(text: &str) -> bool {
    text == FAILURE_SENTINEL
}

/// Anything that turns a prompt into text.
///
/// The output follows the gateway contract: generated text, or
/// [`FAILURE_SENTINEL`]. `None` means the request was cancelled and its result
/// must not be applied.
pub trait TextGenerator: Sync {
    fn complete(&self, prompt: &str) -> impl Future<Output = Option<String>> + Send;
}

/// Client for the generative-text endpoint.
#[derive(Debug, Clone)]
pub struct AiGateway<T = HttpTransport> {
    transport: T,
    url: String,
    policy: RetryPolicy,
}

impl AiGateway<HttpTransport> {
    /// Build an HTTP-backed gateway from the `[ai]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Http`] if the HTTP client fails to build.
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        let transport = HttpTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::new(
            transport,
            config.generate_url(),
            RetryPolicy::from_config(config),
        ))
    }
}

impl<T: Transport> AiGateway<T> {
    pub fn new(transport: T, url: impl Into<String>, policy: RetryPolicy) -> Self {
        Self {
            transport,
            url: url.into(),
            policy,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Generate text for `prompt`, retrying with backoff.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Exhausted`] wrapping the last attempt's error once
    /// `max_attempts` attempts have failed.
    pub async fn try_generate(&self, prompt: &str) -> Result<String, AiError> {
        let request = GenerateRequest::from_prompt(prompt);
        let max_attempts = self.policy.max_attempts;
        let mut attempt = 0u32;

        loop {
            let error = match self.attempt(&request).await {
                Ok(text) => {
                    tracing::debug!(attempts = attempt + 1, "AI request succeeded");
                    return Ok(text);
                }
                Err(error) => error,
            };

            let made = attempt + 1;
            if made >= max_attempts {
                return Err(AiError::Exhausted {
                    attempts: made,
                    last: Box::new(error),
                });
            }

            let delay = self.policy.delay_for(attempt);
            tracing::warn!(
                attempt = made,
                max_attempts,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                %error,
                "AI request failed; retrying"
            );
            tokio::time::sleep(delay).await;
            attempt = made;
        }
    }

    /// Generate text for `prompt`, or [`FAILURE_SENTINEL`] when every attempt
    /// fails.
    pub async fn generate(&self, prompt: &str) -> String {
        match self.try_generate(prompt).await {
            Ok(text) => text,
            Err(error) => {
                tracing::error!(%error, "AI generation failed");
                FAILURE_SENTINEL.to_string()
            }
        }
    }

    /// Like [`Self::try_generate`], but gives up as soon as `cancel` fires,
    /// including during a backoff wait.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Cancelled`] when the token fires first, otherwise
    /// whatever [`Self::try_generate`] returns.
    pub async fn try_generate_until_cancelled(
        &self,
        prompt: &str,
        cancel: &mut CancelToken,
    ) -> Result<String, AiError> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(AiError::Cancelled),
            result = self.try_generate(prompt) => result,
        }
    }

    /// Cancellable [`Self::generate`]. Returns `None` when cancelled.
    pub async fn generate_until_cancelled(
        &self,
        prompt: &str,
        cancel: &mut CancelToken,
    ) -> Option<String> {
        match self.try_generate_until_cancelled(prompt, cancel).await {
            Ok(text) => Some(text),
            Err(AiError::Cancelled) => {
                tracing::info!("AI request cancelled");
                None
            }
            Err(error) => {
                tracing::error!(%error, "AI generation failed");
                Some(FAILURE_SENTINEL.to_string())
            }
        }
    }

    /// Pair this gateway with a cancellation token.
    #[must_use]
    pub fn with_cancel(&self, token: CancelToken) -> WithCancel<'_, T> {
        WithCancel {
            gateway: self,
            token,
        }
    }

    async fn attempt(&self, request: &GenerateRequest) -> Result<String, AiError> {
        let body = self.transport.post_json(&self.url, request).await?;
        extract_text(body)
    }
}

impl<T: Transport> TextGenerator for AiGateway<T> {
    async fn complete(&self, prompt: &str) -> Option<String> {
        Some(self.generate(prompt).await)
    }
}

/// A gateway borrowed together with a [`CancelToken`].
#[derive(Debug)]
pub struct WithCancel<'a, T> {
    gateway: &'a AiGateway<T>,
    token: CancelToken,
}

impl<T: Transport> TextGenerator for WithCancel<'_, T> {
    async fn complete(&self, prompt: &str) -> Option<String> {
        let mut token = self.token.clone();
        self.gateway.generate_until_cancelled(prompt, &mut token).await
    }
}
