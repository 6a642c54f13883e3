//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default row limit for `list`.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Load the two demo issues at startup.
    #[serde(default)]
    pub seed_demo_issues: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            seed_demo_issues: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(!config.seed_demo_issues);
        assert_eq!(config.default_limit, 20);
    }
}
