#![allow(dead_code)]

//! Test infrastructure for tma-db repository tests

use tma_core::NewUser;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// A populated insert shape for a given telegram id
pub fn new_test_user(telegram_id: i64) -> NewUser {
    NewUser {
        telegram_id,
        username: Some("ada".to_string()),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        locale: "en-GB".to_string(),
        avatar_url: Some("https://t.me/i/userpic/ada.jpg".to_string()),
    }
}
