//! Repository for the `pending_object_deletes` table.
//!
//! An intent is written before a bucket delete is attempted and removed once
//! the delete is confirmed. Whatever remains is retried by the sweeper.

use skillconnect_core::types::DbId;
use sqlx::MySqlPool;

use crate::models::pending_delete::PendingObjectDelete;

const COLUMNS: &str = "id, object_key, attempts, last_error, created_at, updated_at";

pub struct PendingDeleteRepo;

impl PendingDeleteRepo {
    /// Record that `object_key` must be deleted. Idempotent per key.
    pub async fn record(pool: &MySqlPool, object_key: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO pending_object_deletes (object_key) VALUES (?) \
             ON DUPLICATE KEY UPDATE updated_at = CURRENT_TIMESTAMP",
        )
        .bind(object_key)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Drop the intent for `object_key` once the delete is confirmed.
    pub async fn remove_by_key(pool: &MySqlPool, object_key: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pending_object_deletes WHERE object_key = ?")
            .bind(object_key)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The `limit` least recently attempted intents.
    pub async fn list_oldest(
        pool: &MySqlPool,
        limit: i64,
    ) -> Result<Vec<PendingObjectDelete>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pending_object_deletes ORDER BY updated_at, id LIMIT ?"
        );
        sqlx::query_as::<_, PendingObjectDelete>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Count one more failed attempt for an intent.
    pub async fn mark_failed(pool: &MySqlPool, id: DbId, error: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE pending_object_deletes \
             SET attempts = attempts + 1, last_error = ? \
             WHERE id = ?",
        )
        .bind(error)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn count(pool: &MySqlPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pending_object_deletes")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
