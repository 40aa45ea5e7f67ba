use thiserror::Error;

use tipul_core::models::patient::PatientId;
use tipul_core::models::user::UserId;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("patient not found: {0}")]
    PatientNotFound(PatientId),

    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error("validation failed: {0}")]
    Validation(String),
}

impl DataError {
    /// True for lookup misses, which screens render as an inline
    /// "not found" state rather than an error.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DataError::PatientNotFound(_) | DataError::UserNotFound(_)
        )
    }
}
