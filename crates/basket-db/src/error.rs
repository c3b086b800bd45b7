//! # Storage Error Types
//!
//! Error types for local storage operations. They wrap sqlx errors and add
//! the context callers need for logging.
//!
//! Storage failures are not surfaced to the cart user: `basket-store` logs
//! them and moves on. The typed variants exist so the log lines and the few
//! startup paths that do propagate can tell failure classes apart.

use thiserror::Error;

/// Local storage operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Storage file could not be opened or created.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed to apply.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),
            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for storage operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DbError::ConnectionFailed("disk full".to_string());
        assert_eq!(err.to_string(), "Connection failed: disk full");

        let err = DbError::PoolExhausted;
        assert_eq!(err.to_string(), "Connection pool exhausted");
    }

    #[test]
    fn test_pool_timeout_maps_to_exhausted() {
        let err: DbError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DbError::PoolExhausted));
    }
}
