//! The HTTP seam of the gateway.
//!
//! [`Transport`] is the only thing that touches the network, which lets the
//! retry loop be exercised with scripted responses.

use std::future::Future;
use std::time::Duration;

use serde_json::Value;

use crate::codec::GenerateRequest;
use crate::error::AiError;

/// POST a generate request and return the decoded JSON body.
pub trait Transport: Send + Sync {
    /// One attempt. Non-success statuses must come back as [`AiError::Api`].
    fn post_json(
        &self,
        url: &str,
        body: &GenerateRequest,
    ) -> impl Future<Output = Result<Value, AiError>> + Send;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns [`AiError::Http`] if the underlying client fails to build.
    pub fn new(timeout: Duration) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .user_agent("crowdfix/0.1")
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &GenerateRequest) -> Result<Value, AiError> {
        let resp = check_response(self.http.post(url).json(body).send().await?).await?;
        Ok(resp.json().await?)
    }
}

/// Map a non-success status to [`AiError::Api`] carrying the body text.
pub(crate) async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AiError> {
    if !resp.status().is_success() {
        return Err(AiError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
