use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found")]
    NotFound,

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// True for errors caused by the caller's input or the contest's shape
    /// rather than by the database itself.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            StorageError::NotFound
                | StorageError::InvalidState(_)
                | StorageError::InvalidArgument(_)
                | StorageError::ConstraintViolation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors() {
        assert!(StorageError::NotFound.is_client_error());
        assert!(StorageError::InvalidState("x".into()).is_client_error());
        assert!(StorageError::InvalidArgument("x".into()).is_client_error());
        assert!(!StorageError::Database(sqlx::Error::RowNotFound).is_client_error());
    }

    #[test]
    fn test_non_database_errors_are_not_constraint_violations() {
        assert!(!StorageError::NotFound.is_unique_violation());
        assert!(!StorageError::Database(sqlx::Error::RowNotFound).is_foreign_key_violation());
    }
}
