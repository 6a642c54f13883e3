mod config_warnings;

pub use config_warnings::warn_unconfigured;

use anyhow::Context;
use cfx_ai::AiGateway;
use cfx_app::App;
use cfx_backend::BackendClient;
use cfx_config::CfxConfig;

pub const AI_MISSING: &str = "AI is not configured. Set CROWDFIX_AI__API_KEY.";
pub const BACKEND_MISSING: &str = "no backend configured. Set CROWDFIX_BACKEND__URL.";

/// Everything a shell command can touch, owned by the shell loop.
pub struct AppContext {
    pub config: CfxConfig,
    pub app: App,
    /// `None` when `ai.api_key` is unset.
    pub ai: Option<AiGateway>,
    /// `None` when `backend.url` is unset; reports then stay local.
    pub backend: Option<BackendClient>,
}

impl AppContext {
    /// Build application state and network clients from configuration.
    pub fn init(config: CfxConfig) -> anyhow::Result<Self> {
        let app = App::from_config(&config).context("invalid application settings")?;

        let ai = if config.ai.is_configured() {
            Some(AiGateway::from_config(&config.ai).context("failed to build AI client")?)
        } else {
            None
        };

        let backend = if config.backend.is_configured() {
            Some(
                BackendClient::from_config(&config.backend)
                    .context("failed to build backend client")?,
            )
        } else {
            None
        };

        tracing::debug!(
            ai = ai.is_some(),
            backend = backend.is_some(),
            issues = app.store().len(),
            "application context ready"
        );

        Ok(Self {
            config,
            app,
            ai,
            backend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_network_clients() {
        let ctx = AppContext::init(CfxConfig::default()).unwrap();
        assert!(ctx.ai.is_none());
        assert!(ctx.backend.is_none());
    }

    #[test]
    fn configured_sections_build_clients() {
        let mut config = CfxConfig::default();
        config.ai.api_key = "key".into();
        config.backend.url = "http://localhost:8000".into();
        let ctx = AppContext::init(config).unwrap();
        assert!(ctx.ai.is_some());
        assert_eq!(
            ctx.backend.as_ref().unwrap().base_url(),
            "http://localhost:8000"
        );
    }
}
