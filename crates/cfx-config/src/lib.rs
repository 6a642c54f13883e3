//! # cfx-config
//!
//! Layered configuration loading for CrowdFix using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CROWDFIX_*` prefix, `__` as separator)
//! 2. Project-level `.crowdfix/config.toml`
//! 3. User-level `~/.config/crowdfix/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CROWDFIX_AI__API_KEY` -> `ai.api_key`,
//! `CROWDFIX_BACKEND__URL` -> `backend.url`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use cfx_config::CfxConfig;
//!
//! let config = CfxConfig::load_with_dotenv().expect("config");
//!
//! if config.backend.is_configured() {
//!     println!("Backend: {}", config.backend.url);
//! }
//! ```

mod ai;
mod backend;
mod error;
mod general;
mod map;
mod report;

pub use ai::AiConfig;
pub use backend::BackendConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use map::MapConfig;
pub use report::ReportConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CfxConfig {
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CfxConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".crowdfix/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CROWDFIX_").split("__"))
    }

    /// Reject values the rest of the system cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ai.max_attempts".into(),
                reason: "must be at least 1".into(),
            });
        }
        if !(-90.0..=90.0).contains(&self.map.center_latitude) {
            return Err(ConfigError::InvalidValue {
                field: "map.center_latitude".into(),
                reason: format!("{} is outside [-90, 90]", self.map.center_latitude),
            });
        }
        if !(-180.0..=180.0).contains(&self.map.center_longitude) {
            return Err(ConfigError::InvalidValue {
                field: "map.center_longitude".into(),
                reason: format!("{} is outside [-180, 180]", self.map.center_longitude),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("crowdfix").join("config.toml"))
    }
}
