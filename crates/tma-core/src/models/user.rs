//! User entity - one row per Telegram identity.

use crate::DEFAULT_LOCALE;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A provisioned user. The internal `id` is assigned by the store on insert
/// and never changes; `telegram_id` is unique across all rows.
///
/// Profile fields are captured at first login and are NOT refreshed by later
/// logins (flagged to product, see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub locale: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insertable subset of [`UserRecord`] - everything the store does not assign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub locale: String,
    pub avatar_url: Option<String>,
}

impl NewUser {
    /// Create a new user with the default locale
    pub fn new(telegram_id: i64) -> Self {
        Self {
            telegram_id,
            username: None,
            first_name: None,
            last_name: None,
            locale: String::from(DEFAULT_LOCALE),
            avatar_url: None,
        }
    }
}

impl UserRecord {
    /// Check if the record still carries the default locale
    pub fn has_default_locale(&self) -> bool {
        self.locale == DEFAULT_LOCALE
    }
}
