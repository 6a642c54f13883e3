//! Shared HTTP response helpers for backend calls.
//!
//! The backend answers errors with `{"detail": ...}` and successes with
//! `{"message": ...}`, but either may come back as plain text. These helpers
//! pick the most useful string out of whatever arrived.

use serde::Deserialize;
use serde_json::Value;

use crate::error::BackendError;

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<Value>,
}

#[derive(Deserialize)]
struct MessageBody {
    message: Option<String>,
}

/// Return the response unchanged on success; otherwise read the body and
/// turn it into [`BackendError::Api`].
pub async fn check_response(
    resp: reqwest::Response,
    fallback: &str,
) -> Result<reqwest::Response, BackendError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    Err(BackendError::Api {
        status,
        message: error_message(&body, fallback),
    })
}

/// Message for a failed call.
///
/// JSON bodies yield `detail` (strings as-is, structured details as JSON) or
/// `fallback` when `detail` is absent. Non-JSON bodies yield their trimmed
/// text, or `fallback` when empty.
#[must_use]
pub fn error_message(body: &str, fallback: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Some(Value::String(detail)),
        }) if !detail.trim().is_empty() => detail,
        Ok(ErrorBody {
            detail: Some(detail),
        }) if !detail.is_null() && !detail.is_string() => detail.to_string(),
        Ok(_) => fallback.to_string(),
        Err(_) => non_empty_or(body, fallback),
    }
}

/// Message for a successful call: `message` from a JSON body, the raw text of
/// a non-JSON body, or `fallback`.
#[must_use]
pub fn success_message(body: &str, fallback: &str) -> String {
    match serde_json::from_str::<MessageBody>(body) {
        Ok(MessageBody {
            message: Some(message),
        }) if !message.trim().is_empty() => message,
        Ok(_) => fallback.to_string(),
        Err(_) => non_empty_or(body, fallback),
    }
}

fn non_empty_or(body: &str, fallback: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
