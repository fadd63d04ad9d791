pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod service;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::init_data::TelegramInitData,
    users::{user_dto::UserDto, users::get_current_user},
};
pub use app_state::AppState;
pub use routes::build_router;
pub use service::user_service::UserService;
