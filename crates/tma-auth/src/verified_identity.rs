use serde::Deserialize;

/// Identity fields asserted by a verified init data payload.
///
/// Only ever produced by [`crate::InitDataValidator::validate`] after the
/// signature and freshness checks pass - a `VerifiedIdentity` with an
/// unverified `telegram_id` cannot exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub language_code: Option<String>,
    pub photo_url: Option<String>,
    /// Unix timestamp asserted by the payload's `auth_date` field
    pub auth_date: i64,
}

/// Wire shape of the `user` JSON blob inside init data.
#[derive(Debug, Deserialize)]
pub(crate) struct TelegramUser {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}
