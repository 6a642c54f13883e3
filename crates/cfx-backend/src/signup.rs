//! `POST /api/signup`.

use serde::Serialize;

use crate::http::{check_response, success_message};
use crate::{BackendClient, BackendError, SIGNUP_FALLBACK, SIGNUP_SUCCESS};

/// Account creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl BackendClient {
    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Http`] if the backend is unreachable, or
    /// [`BackendError::Api`] carrying the server's `detail` (or
    /// `"Something went wrong"`) on a non-success status.
    pub async fn post_signup(&self, request: &SignupRequest) -> Result<String, BackendError> {
        let url = self.endpoint("/api/signup");
        tracing::debug!(%url, email = %request.email, "signing up");
        let resp = self.http.post(&url).json(request).send().await?;
        let resp = check_response(resp, SIGNUP_FALLBACK).await?;
        let body = resp.text().await?;
        Ok(success_message(&body, SIGNUP_SUCCESS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_payload_shape() {
        let request = SignupRequest {
            username: "asha".into(),
            email: "asha@example.com".into(),
            password: "hunter2".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username": "asha",
                "email": "asha@example.com",
                "password": "hunter2",
            })
        );
    }
}
