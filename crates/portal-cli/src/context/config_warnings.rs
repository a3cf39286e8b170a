use portal_config::PortalConfig;

/// Emit warnings for config that will silently put the gateway in demo mode.
pub fn warn_unconfigured(config: &PortalConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PortalConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.google.is_configured() {
        if has_env_prefix(&env_keys, "PORTAL_GOOGLE") {
            warnings.push(
                "Google config appears default while PORTAL_GOOGLE* env vars exist. Use double underscores (example: PORTAL_GOOGLE__CLIENT_ID)."
                    .to_string(),
            );
        } else {
            warnings.push(
                "no Google client id configured; Drive, Classroom and Gmail commands will use demo data."
                    .to_string(),
            );
        }
    }

    if config.google.is_configured() && !config.google.is_domain_authorized("127.0.0.1") {
        warnings.push(
            "google.authorized_domains does not include 127.0.0.1; browser sign-in will fall back to demo mode."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
