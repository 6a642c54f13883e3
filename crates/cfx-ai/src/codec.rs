//! Request and response bodies for the `generateContent` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AiError;

/// `{"contents": [{"parts": [{"text": prompt}]}]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Part {
    text: String,
}

impl GenerateRequest {
    #[must_use]
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Pull `candidates[0].content.parts[0].text` out of a response, trimmed.
///
/// # Errors
///
/// Returns [`AiError::MalformedResponse`] if the path is missing or the text
/// is blank.
pub fn extract_text(value: Value) -> Result<String, AiError> {
    let response: GenerateResponse = serde_json::from_value(value)
        .map_err(|error| AiError::MalformedResponse(error.to_string()))?;

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(|| {
            AiError::MalformedResponse("missing candidates[0].content.parts[0].text".into())
        })?;

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AiError::MalformedResponse("generated text is empty".into()));
    }
    Ok(trimmed.to_string())
}
