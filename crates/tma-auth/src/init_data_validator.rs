use crate::verified_identity::TelegramUser;
use crate::{AuthError, Result as AuthErrorResult, VerifiedIdentity};

use std::panic::Location;

use error_location::ErrorLocation;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Telegram Web App init data verifier.
///
/// Telegram signs the payload with HMAC-SHA256. The signing key is derived
/// from the bot token: `HMAC_SHA256(key="WebAppData", msg=bot_token)`. The
/// supplied `hash` field is the hex digest of the remaining fields,
/// formatted `key=value`, sorted, joined with newlines.
pub struct InitDataValidator {
    secret_key: [u8; 32],
    max_age_secs: u64,
}

impl InitDataValidator {
    /// Derive the signing secret from the bot token.
    ///
    /// `max_age_secs` is the freshness window applied to `auth_date`.
    pub fn new(bot_token: &str, max_age_secs: u64) -> Self {
        let mut mac =
            HmacSha256::new_from_slice(b"WebAppData").expect("HMAC can take key of any size");
        mac.update(bot_token.as_bytes());
        let secret_key: [u8; 32] = mac.finalize().into_bytes().into();

        Self {
            secret_key,
            max_age_secs,
        }
    }

    /// Verify a raw init data string and parse the identity it asserts.
    ///
    /// Pure function over the input and the construction-time secret:
    /// deterministic, no side effects, touches no store.
    #[track_caller]
    pub fn validate(&self, init_data: &str) -> AuthErrorResult<VerifiedIdentity> {
        if init_data.trim().is_empty() {
            return Err(AuthError::MissingPayload {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let params = parse_query_pairs(init_data);

        let received_hash = params
            .iter()
            .find(|(key, _)| key == "hash")
            .map(|(_, value)| value.as_str())
            .ok_or_else(|| AuthError::MissingField {
                field: "hash",
                location: ErrorLocation::from(Location::caller()),
            })?;

        // Data-check string: every field except `hash`, sorted by key
        let mut check_pairs: Vec<String> = params
            .iter()
            .filter(|(key, _)| key != "hash")
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        check_pairs.sort();
        let data_check_string = check_pairs.join("\n");

        let supplied = hex::decode(received_hash).map_err(|_| AuthError::InvalidSignature {
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mut mac =
            HmacSha256::new_from_slice(&self.secret_key).expect("HMAC can take key of any size");
        mac.update(data_check_string.as_bytes());

        // verify_slice compares in constant time
        mac.verify_slice(&supplied)
            .map_err(|_| AuthError::InvalidSignature {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let auth_date = self.check_freshness(&params)?;

        let user_json = params
            .iter()
            .find(|(key, _)| key == "user")
            .map(|(_, value)| value.as_str())
            .ok_or_else(|| AuthError::MissingField {
                field: "user",
                location: ErrorLocation::from(Location::caller()),
            })?;

        let user: TelegramUser =
            serde_json::from_str(user_json).map_err(|e| AuthError::Malformed {
                message: format!("user field is not valid JSON: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(VerifiedIdentity {
            telegram_id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            language_code: user.language_code,
            photo_url: user.photo_url,
            auth_date,
        })
    }

    /// Freshness window applied to `auth_date`.
    pub fn max_age_secs(&self) -> u64 {
        self.max_age_secs
    }

    #[track_caller]
    fn check_freshness(&self, params: &[(String, String)]) -> AuthErrorResult<i64> {
        let auth_date_str = params
            .iter()
            .find(|(key, _)| key == "auth_date")
            .map(|(_, value)| value.as_str())
            .ok_or_else(|| AuthError::MissingField {
                field: "auth_date",
                location: ErrorLocation::from(Location::caller()),
            })?;

        let auth_date: i64 = auth_date_str.parse().map_err(|_| AuthError::Malformed {
            message: format!("auth_date is not a timestamp: {}", auth_date_str),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let age_secs = chrono::Utc::now().timestamp() - auth_date;
        if age_secs > self.max_age_secs as i64 {
            return Err(AuthError::Expired {
                age_secs,
                max_age_secs: self.max_age_secs,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(auth_date)
    }
}

/// Split the query-string payload into percent-decoded key/value pairs.
/// Pairs without an `=` are dropped.
fn parse_query_pairs(init_data: &str) -> Vec<(String, String)> {
    init_data
        .split('&')
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) => {
                    let decoded = urlencoding::decode(value).ok()?;
                    Some((key.to_string(), decoded.into_owned()))
                }
                _ => None,
            }
        })
        .collect()
}
