use crate::AuthConfig;

#[test]
fn default_auth_config_is_missing_bot_token() {
    let config = AuthConfig::default();

    assert!(config.bot_token.is_none());
    assert!(config.validate().is_err());
}

#[test]
fn empty_bot_token_fails_validation() {
    let config = AuthConfig {
        bot_token: Some("   ".to_string()),
        ..AuthConfig::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn present_bot_token_passes_validation() {
    let config = AuthConfig {
        bot_token: Some("123456:test-token".to_string()),
        ..AuthConfig::default()
    };

    assert!(config.validate().is_ok());
}

#[test]
fn zero_max_age_fails_validation() {
    let config = AuthConfig {
        bot_token: Some("123456:test-token".to_string()),
        max_age_secs: 0,
    };

    assert!(config.validate().is_err());
}

#[test]
fn default_max_age_is_one_day() {
    let config = AuthConfig::default();

    assert_eq!(config.max_age_secs, 86_400);
}
