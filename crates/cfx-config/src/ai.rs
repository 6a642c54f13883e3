//! Generative-text endpoint configuration.

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    String::from("https://generativelanguage.googleapis.com/v1beta")
}

fn default_model() -> String {
    String::from("gemini-2.5-flash")
}

const fn default_max_attempts() -> u32 {
    3
}

const fn default_base_delay_ms() -> u64 {
    1000
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiConfig {
    /// API key appended to the generate URL as `?key=`.
    #[serde(default)]
    pub api_key: String,

    /// API base, without the `/models/...` suffix.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Total attempts per request, including the first one.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Backoff base. The wait after failed attempt `i` is `base × 2^i`.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Per-attempt HTTP timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_endpoint(),
            model: default_model(),
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AiConfig {
    /// Check if the AI config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Full `generateContent` URL for the configured model.
    #[must_use]
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            urlencoding::encode(&self.api_key)
        )
    }
}
