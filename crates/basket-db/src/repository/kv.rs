//! # Key-Value Repository
//!
//! Storage operations for string blobs keyed by name.
//!
//! This is the whole storage contract the cart relies on:
//! - `get(key)` → the stored string, or `None` if the key is absent
//! - `set(key, value)` → upsert, replacing any previous value
//! - `remove(key)` → delete, reporting whether a row existed
//!
//! Values are opaque here; encoding and decoding (JSON for the cart list)
//! belong to the caller.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Repository for key-value storage operations.
///
/// ## Usage
/// ```rust,ignore
/// let kv = db.kv();
/// kv.set("@basket:cart", "[]").await?;
/// let blob = kv.get("@basket:cart").await?; // Some("[]")
/// ```
#[derive(Debug, Clone)]
pub struct KvRepository {
    pool: SqlitePool,
}

impl KvRepository {
    /// Creates a new KvRepository.
    pub fn new(pool: SqlitePool) -> Self {
        KvRepository { pool }
    }

    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when the key has never been written (or was removed).
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        debug!(key = %key, "kv get");

        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    /// Writes `value` under `key`, replacing any previous value.
    pub async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, bytes = value.len(), "kv set");

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes the row under `key`.
    ///
    /// Returns `true` if a row was removed, `false` if the key was absent.
    pub async fn remove(&self, key: &str) -> DbResult<bool> {
        debug!(key = %key, "kv remove");

        let result = sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
