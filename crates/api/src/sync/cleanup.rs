//! Best-effort object deletion backed by durable intents.
//!
//! An intent row is written before the bucket is contacted and removed only
//! once the delete is confirmed, so a failed delete is retried by
//! [`crate::background::object_sweeper`] instead of being forgotten.

use skillconnect_db::repositories::PendingDeleteRepo;
use skillconnect_db::DbPool;
use skillconnect_storage::ObjectStore;

/// Delete `key` now, leaving an intent behind if that fails.
///
/// Never returns an error; returns whether the object is confirmed gone.
pub async fn discard_object(pool: &DbPool, objects: &dyn ObjectStore, key: &str) -> bool {
    let recorded = match PendingDeleteRepo::record(pool, key).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(key, error = %e, "Could not record pending object delete");
            false
        }
    };

    match objects.delete_key(key).await {
        Ok(()) => {
            if recorded {
                if let Err(e) = PendingDeleteRepo::remove_by_key(pool, key).await {
                    tracing::warn!(key, error = %e, "Object deleted but intent not cleared");
                }
            }
            true
        }
        Err(e) if recorded => {
            tracing::warn!(key, error = %e, "Object delete failed, left for the sweeper");
            false
        }
        Err(e) => {
            tracing::error!(key, error = %e, "Object delete failed and no intent was recorded");
            false
        }
    }
}

/// Queue `key` for the sweeper without contacting the bucket.
pub async fn defer_object_delete(pool: &DbPool, key: &str) {
    match PendingDeleteRepo::record(pool, key).await {
        Ok(()) => tracing::info!(key, "Orphaned object queued for deletion"),
        Err(e) => tracing::error!(key, error = %e, "Could not queue orphaned object"),
    }
}
