use cfx_config::CfxConfig;

/// Warn when env vars look like they were meant for a section that still
/// holds its defaults, which usually means a single underscore was used.
pub fn warn_unconfigured(config: &CfxConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &CfxConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.ai.is_configured() && has_env_prefix(&env_keys, "CROWDFIX_AI") {
        warnings.push(
            "AI config appears default while CROWDFIX_AI* env vars exist. Use double underscores (example: CROWDFIX_AI__API_KEY)."
                .to_string(),
        );
    }

    if !config.backend.is_configured() && has_env_prefix(&env_keys, "CROWDFIX_BACKEND") {
        warnings.push(
            "Backend config appears default while CROWDFIX_BACKEND* env vars exist. Use double underscores (example: CROWDFIX_BACKEND__URL)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
