use sqlx::error::ErrorKind;
use thiserror::Error;

/// Result type alias for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;

/// Failure surface of the user repository.
#[derive(Debug, Error)]
pub enum RepoError {
    /// The targeted row does not exist in the store.
    #[error("user not found")]
    NotFound,

    /// A uniqueness or required-field constraint rejected the write.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Connectivity or transactional failure from the backing store.
    #[error("store error: {0}")]
    Store(#[source] sqlx::Error),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if matches!(
                db_err.kind(),
                ErrorKind::UniqueViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::CheckViolation
            ) {
                return RepoError::ConstraintViolation(db_err.message().to_string());
            }
        }
        RepoError::Store(err)
    }
}
