//! # Store Error Types
//!
//! The cart store distinguishes exactly two failure classes. Everything
//! else (unknown ids, duplicate adds) is a defined no-op, not an error.

use thiserror::Error;

use basket_db::DbError;

/// Cart store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The cart capability was accessed with no store installed.
    ///
    /// Raised synchronously by [`crate::CartHandle::get`] on every call
    /// until a store is installed.
    #[error("cart store used before one was installed on the handle")]
    NotInitialized,

    /// Local storage failed while opening the store.
    ///
    /// After a successful open, storage failures are logged by the flusher
    /// and never surfaced here.
    #[error("Storage error: {0}")]
    Storage(#[from] DbError),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_errors_wrap_db_errors() {
        let err: StoreError = DbError::PoolExhausted.into();
        assert!(matches!(err, StoreError::Storage(DbError::PoolExhausted)));
    }
}
