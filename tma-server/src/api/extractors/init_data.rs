//! Axum extractor for the signed Telegram init data header

use crate::{ApiError, AppState};

use tma_auth::{AuthError, VerifiedIdentity};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// Header carrying the raw signed init data payload
pub const INIT_DATA_HEADER: &str = "X-Telegram-Init-Data";

/// Extracts and verifies the Telegram init data payload
///
/// A missing header is rejected before the validator or the store is ever
/// touched. A present header is verified against the configured bot token;
/// handlers that take this extractor only run for verified identities.
pub struct TelegramInitData(pub VerifiedIdentity);

impl FromRequestParts<AppState> for TelegramInitData {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(header_value) = parts.headers.get(INIT_DATA_HEADER) else {
                return Err(ApiError::from(AuthError::MissingPayload {
                    location: ErrorLocation::from(Location::caller()),
                }));
            };

            let raw = header_value.to_str().map_err(|_| {
                ApiError::from(AuthError::Malformed {
                    message: "init data header is not valid UTF-8".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
            })?;

            let identity = state.init_data.validate(raw)?;
            log::debug!("Verified init data for telegram id {}", identity.telegram_id);

            Ok(TelegramInitData(identity))
        }
    }
}
