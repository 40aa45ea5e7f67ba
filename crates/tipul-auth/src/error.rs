use thiserror::Error;

use tipul_data::error::DataError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("directory error: {0}")]
    Directory(#[from] DataError),
}
