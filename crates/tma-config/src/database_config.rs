use crate::{
    DEFAULT_DATABASE_FILENAME, DEFAULT_DB_BUSY_TIMEOUT_SECS, DEFAULT_DB_MAX_CONNECTIONS,
};

use serde::Deserialize;

/// SQLite file location and pool tuning.
///
/// `path` is relative to the config directory so the whole deployment
/// lives under one root.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
    pub max_connections: u32,
    /// How long a writer waits on a locked database before giving up
    pub busy_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            busy_timeout_secs: DEFAULT_DB_BUSY_TIMEOUT_SECS,
        }
    }
}
