pub mod models;

pub use models::user::{NewUser, UserRecord};

/// Locale stored when the Telegram identity carries no language code.
pub const DEFAULT_LOCALE: &str = "en";
