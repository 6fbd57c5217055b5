//! Tests for configuration field resolution.

use rstest::rstest;

use super::PrboardConfig;

#[rstest]
fn resolve_token_returns_value_when_present() {
    let config = PrboardConfig {
        token: Some("my-token".to_owned()),
        ..Default::default()
    };

    let result = config.resolve_token();
    assert_eq!(
        result.ok(),
        Some("my-token".to_owned()),
        "should return the token"
    );
}

#[rstest]
fn resolve_token_returns_error_when_none() {
    // Lock and clear the legacy variables to ensure test isolation
    let _guard = env_lock::lock_env([
        ("GITHUB_PAT", None::<&str>),
        ("GITHUB_TOKEN", None::<&str>),
    ]);
    let config = PrboardConfig::default();

    let result = config.resolve_token();
    assert!(result.is_err(), "should return error when token is None");
}

#[rstest]
fn resolve_token_falls_back_to_github_pat() {
    let _guard = env_lock::lock_env([
        ("GITHUB_PAT", Some("pat-token")),
        ("GITHUB_TOKEN", None::<&str>),
    ]);
    let config = PrboardConfig::default();

    let result = config.resolve_token();
    assert_eq!(
        result.ok(),
        Some("pat-token".to_owned()),
        "should fall back to GITHUB_PAT"
    );
}

#[rstest]
fn resolve_token_prefers_config_over_legacy_env() {
    let _guard = env_lock::lock_env([("GITHUB_PAT", Some("pat-token"))]);
    let config = PrboardConfig {
        token: Some("config-token".to_owned()),
        ..Default::default()
    };

    let result = config.resolve_token();
    assert_eq!(
        result.ok(),
        Some("config-token".to_owned()),
        "configured token should win over the legacy environment"
    );
}

#[rstest]
fn resolve_token_pat_wins_over_github_token() {
    let _guard = env_lock::lock_env([
        ("GITHUB_PAT", Some("pat-token")),
        ("GITHUB_TOKEN", Some("classic-token")),
    ]);
    let config = PrboardConfig::default();

    let result = config.resolve_token();
    assert_eq!(
        result.ok(),
        Some("pat-token".to_owned()),
        "GITHUB_PAT should be consulted before GITHUB_TOKEN"
    );
}

#[rstest]
fn bind_addr_defaults_to_loopback() {
    let config = PrboardConfig::default();
    assert_eq!(config.bind_addr(), "127.0.0.1:8080");
}

#[rstest]
fn bind_addr_uses_configured_value() {
    let config = PrboardConfig {
        bind_addr: Some("0.0.0.0:3000".to_owned()),
        ..Default::default()
    };
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

#[rstest]
fn api_base_defaults_to_public_github() {
    let config = PrboardConfig::default();
    assert_eq!(config.api_base(), "https://api.github.com");
}

#[rstest]
fn api_base_uses_configured_value() {
    let config = PrboardConfig {
        api_base: Some("https://ghe.example.com/api/v3".to_owned()),
        ..Default::default()
    };
    assert_eq!(config.api_base(), "https://ghe.example.com/api/v3");
}
