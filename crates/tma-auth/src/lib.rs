pub mod error;
pub mod init_data_validator;
pub mod verified_identity;

pub use error::{AuthError, Result};
pub use init_data_validator::InitDataValidator;
pub use verified_identity::VerifiedIdentity;
