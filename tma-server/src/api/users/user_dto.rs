use tma_core::UserRecord;

use serde::Serialize;

/// Public profile projection of a user record.
/// Absent optional fields serialize as JSON null.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub locale: String,
}

impl From<UserRecord> for UserDto {
    fn from(u: UserRecord) -> Self {
        Self {
            id: u.id,
            username: u.username,
            first_name: u.first_name,
            last_name: u.last_name,
            locale: u.locale,
        }
    }
}
