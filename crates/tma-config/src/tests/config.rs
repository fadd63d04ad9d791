use crate::Config;

use serial_test::serial;

fn set_var(key: &str, value: &str) {
    // SAFETY: tests touching process env are serialized via #[serial]
    unsafe { std::env::set_var(key, value) };
}

fn remove_var(key: &str) {
    // SAFETY: tests touching process env are serialized via #[serial]
    unsafe { std::env::remove_var(key) };
}

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.database.path, "data.db");
    assert_eq!(config.database.max_connections, 10);
    assert!(config.auth.bot_token.is_none());
}

#[test]
fn zero_pool_size_fails_validation() {
    let mut config = Config::default();
    config.database.max_connections = 0;
    config.auth.bot_token = Some("123456:test-token".to_string());

    assert!(config.validate().is_err());
}

#[test]
fn default_config_without_bot_token_fails_validation() {
    let config = Config::default();

    assert!(config.validate().is_err());
}

#[test]
fn low_port_fails_validation() {
    let mut config = Config::default();
    config.server.port = 80;
    config.auth.bot_token = Some("123456:test-token".to_string());

    assert!(config.validate().is_err());
}

#[test]
fn escaping_database_path_fails_validation() {
    let mut config = Config::default();
    config.database.path = "../outside.db".to_string();
    config.auth.bot_token = Some("123456:test-token".to_string());

    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn env_overrides_take_precedence() {
    let dir = tempfile::tempdir().unwrap();
    set_var("TMA_CONFIG_DIR", dir.path().to_str().unwrap());
    set_var("TMA_SERVER_PORT", "9100");
    set_var("TMA_AUTH_BOT_TOKEN", "123456:env-token");

    let config = Config::load().unwrap();

    assert_eq!(config.server.port, 9100);
    assert_eq!(config.auth.bot_token.as_deref(), Some("123456:env-token"));
    assert!(config.validate().is_ok());

    remove_var("TMA_CONFIG_DIR");
    remove_var("TMA_SERVER_PORT");
    remove_var("TMA_AUTH_BOT_TOKEN");
}

#[test]
#[serial]
fn config_toml_is_loaded_from_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
            [server]
            port = 9200

            [auth]
            bot_token = "123456:file-token"
            max_age_secs = 600
        "#,
    )
    .unwrap();
    set_var("TMA_CONFIG_DIR", dir.path().to_str().unwrap());

    let config = Config::load().unwrap();

    assert_eq!(config.server.port, 9200);
    assert_eq!(config.auth.bot_token.as_deref(), Some("123456:file-token"));
    assert_eq!(config.auth.max_age_secs, 600);

    remove_var("TMA_CONFIG_DIR");
}
