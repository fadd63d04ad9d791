use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing init data payload {location}")]
    MissingPayload { location: ErrorLocation },

    #[error("Missing init data field '{field}' {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Init data signature mismatch {location}")]
    InvalidSignature { location: ErrorLocation },

    #[error("Init data expired: {age_secs}s old (max {max_age_secs}s) {location}")]
    Expired {
        age_secs: i64,
        max_age_secs: u64,
        location: ErrorLocation,
    },

    #[error("Malformed init data: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
