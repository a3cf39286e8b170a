use figment::Jail;
use portal_config::PortalConfig;

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("PORTAL_GOOGLE__CLIENT_ID", "id-from-env");
        jail.set_env("PORTAL_GENERAL__REQUEST_TIMEOUT_SECS", "42");

        let config = PortalConfig::load().expect("config loads");
        assert_eq!(config.google.client_id, "id-from-env");
        assert_eq!(config.general.request_timeout_secs, 42);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".portal")?;
        jail.create_file(
            ".portal/config.toml",
            r#"
[google]
client_id = "from-file"
"#,
        )?;
        jail.set_env("PORTAL_GOOGLE__CLIENT_ID", "from-env");

        let config = PortalConfig::load().expect("config loads");
        assert_eq!(config.google.client_id, "from-env");
        Ok(())
    });
}

#[test]
fn env_can_disable_demo_fallback() {
    Jail::expect_with(|jail| {
        jail.set_env("PORTAL_GENERAL__DEMO_FALLBACK", "false");

        let config = PortalConfig::load().expect("config loads");
        assert!(!config.general.demo_fallback);
        Ok(())
    });
}

#[test]
fn env_list_sets_authorized_domains() {
    Jail::expect_with(|jail| {
        jail.set_env("PORTAL_GOOGLE__AUTHORIZED_DOMAINS", "[localhost, school.edu]");

        let config = PortalConfig::load().expect("config loads");
        assert!(config.google.is_domain_authorized("school.edu"));
        assert!(config.google.is_domain_authorized("localhost"));
        Ok(())
    });
}
