pub mod user_dto;
pub mod users;
