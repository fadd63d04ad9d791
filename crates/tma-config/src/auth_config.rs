use crate::{ConfigError, ConfigErrorResult, DEFAULT_AUTH_MAX_AGE_SECS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Telegram bot token the init data secret is derived from.
    /// Required - the server refuses to start without one.
    pub bot_token: Option<String>,
    /// Freshness window for the payload's auth_date, in seconds
    pub max_age_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            max_age_secs: DEFAULT_AUTH_MAX_AGE_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.bot_token {
            None => Err(ConfigError::auth(
                "auth.bot_token is required (set it in config.toml or TMA_AUTH_BOT_TOKEN)",
            )),
            Some(token) if token.trim().is_empty() => {
                Err(ConfigError::auth("auth.bot_token cannot be empty"))
            }
            Some(_) => Ok(()),
        }?;

        if self.max_age_secs == 0 {
            return Err(ConfigError::auth("auth.max_age_secs must be > 0"));
        }

        Ok(())
    }
}
