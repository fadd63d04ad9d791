//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use tma_auth::AuthError;
use tma_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code and message
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "missing_telegram_payload")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Init data verification failure (401)
    #[error("Unauthorized ({code}): {message} {location}")]
    Unauthorized {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Unauthorized { code, message, .. } => {
                // Verification failures are expected traffic, not server faults
                log::debug!("Rejected request: {} ({})", message, code);
                (
                    StatusCode::UNAUTHORIZED,
                    ApiErrorBody {
                        code: code.into(),
                        message,
                    },
                )
            }
            ApiError::Internal { ref message, .. } => {
                log::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody {
                        code: "internal_error".into(),
                        message: message.clone(),
                    },
                )
            }
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert verification failures to 401 responses
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let code = match e {
            AuthError::MissingPayload { .. } => "missing_telegram_payload",
            AuthError::Expired { .. } => "expired_telegram_payload",
            AuthError::InvalidSignature { .. }
            | AuthError::MissingField { .. }
            | AuthError::Malformed { .. } => "invalid_telegram_payload",
        };

        ApiError::Unauthorized {
            code,
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
