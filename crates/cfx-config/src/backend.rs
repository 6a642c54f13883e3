//! REST backend configuration.

use serde::{Deserialize, Serialize};

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL, e.g. `http://localhost:8000`. Empty means no backend is wired
    /// and reports stay local.
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        assert!(!BackendConfig::default().is_configured());
    }

    #[test]
    fn whitespace_url_is_not_configured() {
        let config = BackendConfig {
            url: "   ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}
