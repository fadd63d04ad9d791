#![allow(dead_code)]

//! Test infrastructure for tma-server API tests

use std::sync::Arc;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tma_auth::InitDataValidator;
use tma_server::AppState;

type HmacSha256 = Hmac<Sha256>;

pub const TEST_BOT_TOKEN: &str = "123456:test-bot-token";
pub const TEST_MAX_AGE_SECS: u64 = 86_400;

/// Create a test pool with in-memory SQLite and migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/tma-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    let init_data = Arc::new(InitDataValidator::new(TEST_BOT_TOKEN, TEST_MAX_AGE_SECS));

    AppState { pool, init_data }
}

/// Sign init data pairs the way Telegram does, against TEST_BOT_TOKEN
pub fn sign_init_data(pairs: &[(&str, &str)]) -> String {
    sign_init_data_with_token(pairs, TEST_BOT_TOKEN)
}

/// Sign init data pairs against an arbitrary bot token
pub fn sign_init_data_with_token(pairs: &[(&str, &str)], bot_token: &str) -> String {
    let mut check_pairs: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    check_pairs.sort();
    let data_check_string = check_pairs.join("\n");

    let mut secret_mac = HmacSha256::new_from_slice(b"WebAppData").unwrap();
    secret_mac.update(bot_token.as_bytes());
    let secret_key = secret_mac.finalize().into_bytes();

    let mut mac = HmacSha256::new_from_slice(&secret_key).unwrap();
    mac.update(data_check_string.as_bytes());
    let hash = hex::encode(mac.finalize().into_bytes());

    let mut encoded: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect();
    encoded.push(format!("hash={}", hash));
    encoded.join("&")
}

/// Signed payload for a user JSON blob with a fresh auth_date
pub fn signed_payload_for(user_json: &str) -> String {
    let auth_date = chrono::Utc::now().timestamp().to_string();
    sign_init_data(&[("user", user_json), ("auth_date", &auth_date)])
}

/// Number of rows in the users table
pub async fn count_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}
