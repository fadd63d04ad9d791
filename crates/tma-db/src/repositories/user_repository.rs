//! User repository - lookup and insert against the users table.
//!
//! Lookups run against the pool directly (read-only, no transaction
//! needed). `insert` requires a `Transaction` so the caller owns the unit
//! of work and decides when to commit; an uncommitted transaction rolls
//! back on drop.

use crate::{DbError, Result as DbErrorResult};

use tma_core::{NewUser, UserRecord};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_telegram_id(&self, telegram_id: i64) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query(
            r#"
                SELECT id, telegram_id, username, first_name, last_name,
                    locale, avatar_url, created_at
                FROM users
                WHERE telegram_id = ?
                "#,
        )
        .bind(telegram_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_user_row(&r)).transpose()
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query(
            r#"
                SELECT id, telegram_id, username, first_name, last_name,
                    locale, avatar_url, created_at
                FROM users
                WHERE id = ?
                "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_user_row(&r)).transpose()
    }

    /// Insert a new user and return the record with its assigned rowid.
    ///
    /// Requires a `Transaction` - the type system makes the caller own the
    /// commit. A concurrent insert for the same telegram_id loses to the
    /// uniqueness constraint and surfaces as [`DbError::UniqueViolation`].
    pub async fn insert(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        user: &NewUser,
    ) -> DbErrorResult<UserRecord> {
        // Second precision: created_at is stored as a unix timestamp
        let created_at_ts = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO users (
                    telegram_id, username, first_name, last_name,
                    locale, avatar_url, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
        )
        .bind(user.telegram_id)
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.locale)
        .bind(&user.avatar_url)
        .bind(created_at_ts)
        .execute(&mut **tx)
        .await?;

        let created_at =
            DateTime::from_timestamp(created_at_ts, 0).ok_or_else(|| DbError::Initialization {
                message: "Invalid timestamp for users.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(UserRecord {
            id: result.last_insert_rowid(),
            telegram_id: user.telegram_id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            locale: user.locale.clone(),
            avatar_url: user.avatar_url.clone(),
            created_at,
        })
    }
}

#[track_caller]
fn map_user_row(row: &SqliteRow) -> DbErrorResult<UserRecord> {
    let created_at_ts: i64 = row.try_get("created_at")?;
    let created_at =
        DateTime::from_timestamp(created_at_ts, 0).ok_or_else(|| DbError::Initialization {
            message: "Invalid timestamp in users.created_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(UserRecord {
        id: row.try_get("id")?,
        telegram_id: row.try_get("telegram_id")?,
        username: row.try_get("username")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        locale: row.try_get("locale")?,
        avatar_url: row.try_get("avatar_url")?,
        created_at,
    })
}
