use acad_config::AcadConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &AcadConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &AcadConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.ai.is_configured() && has_env_prefix(&env_keys, "ACAD_AI") {
        warnings.push(
            "AI config has no API key while ACAD_AI* env vars exist. Use double underscores (example: ACAD_AI__API_KEY)."
                .to_string(),
        );
    }

    if config.storage.data_dir.is_empty() && has_env_prefix(&env_keys, "ACAD_STORAGE") {
        warnings.push(
            "Storage config appears default while ACAD_STORAGE* env vars exist. Use double underscores (example: ACAD_STORAGE__DATA_DIR)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
