//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use th_config::TrustHireConfig;

#[test]
fn loads_gemini_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gemini]
api_key = "test-api-key"
base_url = "http://localhost:8787/v1beta"
flash_model = "flash-test"
pro_model = "pro-test"
"#,
        )?;

        let config: TrustHireConfig = Figment::from(Serialized::defaults(TrustHireConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.gemini.api_key, "test-api-key");
        assert_eq!(config.gemini.base_url, "http://localhost:8787/v1beta");
        assert_eq!(config.gemini.flash_model, "flash-test");
        assert_eq!(config.gemini.pro_model, "pro-test");
        assert!(config.gemini.is_configured());
        Ok(())
    });
}

#[test]
fn loads_session_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[session]
store_path = "/tmp/trusthire-session.json"
"#,
        )?;

        let config: TrustHireConfig = Figment::from(Serialized::defaults(TrustHireConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(
            config.session.store_path(),
            Some("/tmp/trusthire-session.json")
        );
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults_for_missing_fields() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gemini]
api_key = "only-the-key"
"#,
        )?;

        let config: TrustHireConfig = Figment::from(Serialized::defaults(TrustHireConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.gemini.api_key, "only-the-key");
        assert_eq!(config.gemini.flash_model, "gemini-3-flash-preview");
        assert_eq!(config.gemini.pro_model, "gemini-3-pro-preview");
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gemini]
api_key = "from-toml"
"#,
        )?;
        jail.set_env("TRUSTHIRE_GEMINI__API_KEY", "from-env");

        let config: TrustHireConfig = Figment::from(Serialized::defaults(TrustHireConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("TRUSTHIRE_").split("__"))
            .extract()?;

        assert_eq!(config.gemini.api_key, "from-env");
        Ok(())
    });
}
