//! Integration tests for layered configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use sketch_config::{ConfigError, SketchConfig};
use sketch_core::entities::StyleTemplate;

fn layered(file: &str) -> Figment {
    Figment::from(Serialized::defaults(SketchConfig::default()))
        .merge(Toml::file(file))
        .merge(Env::prefixed("SKETCH_").split("__"))
}

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gateway]
base_url = "https://sketch.example.com/"
timeout_secs = 30

[auth]
email = "maker@example.com"

[general]
download_dir = "/tmp/frames"
default_style = "portraitSketch"
"#,
        )?;

        let config = SketchConfig::from_figment(&layered("config.toml")).expect("config");
        assert_eq!(config.gateway.base_url(), "https://sketch.example.com");
        assert_eq!(config.gateway.timeout_secs, Some(30));
        assert_eq!(config.auth.email, "maker@example.com");
        assert_eq!(config.general.download_dir, "/tmp/frames");
        assert_eq!(config.general.default_style, StyleTemplate::PortraitSketch);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gateway]
base_url = "https://from-toml.example.com"
"#,
        )?;
        jail.set_env("SKETCH_GATEWAY__BASE_URL", "http://from-env:9000");
        jail.set_env("SKETCH_AUTH__EMAIL", "env@example.com");

        let config = SketchConfig::from_figment(&layered("config.toml")).expect("config");
        assert_eq!(config.gateway.base_url(), "http://from-env:9000");
        assert_eq!(config.auth.email, "env@example.com");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[auth]\nemail = \"x@example.com\"\n")?;

        let config = SketchConfig::from_figment(&layered("config.toml")).expect("config");
        assert_eq!(config.gateway.base_url(), "http://127.0.0.1:8000");
        assert_eq!(config.general.default_style, StyleTemplate::Hayao);
        Ok(())
    });
}

#[test]
fn invalid_base_url_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[gateway]\nbase_url = \"localhost:8000\"\n")?;

        let err = SketchConfig::from_figment(&layered("config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn unknown_style_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\ndefault_style = \"ghibli\"\n")?;

        let err = SketchConfig::from_figment(&layered("config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
