//! Current-user REST API handler
//!
//! Authentication and provisioning happen on the same request: the
//! extractor verifies the init data payload, the service looks the user up
//! or creates it on first login.

use crate::{ApiResult, TelegramInitData, UserDto, UserService};

use crate::AppState;

use axum::{Json, extract::State};

/// GET /api/v1/users/me
///
/// Get the current user's profile, provisioning it on first login
pub async fn get_current_user(
    State(state): State<AppState>,
    TelegramInitData(identity): TelegramInitData,
) -> ApiResult<Json<UserDto>> {
    let service = UserService::new(state.pool.clone());
    let user = service.get_or_create(&identity).await?;

    Ok(Json(UserDto::from(user)))
}
