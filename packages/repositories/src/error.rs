use sea_orm::DbErr;
use services::PasswordError;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("no matching record found")]
    NoRecord,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("duplicate email")]
    DuplicateEmail,

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error(transparent)]
    Password(#[from] PasswordError),
}
