//! Periodic retry of pending object deletes.
//!
//! Image replacement deletes the previous object best-effort and records a
//! `pending_object_deletes` row whenever that fails (or when a freshly
//! uploaded object ends up unreferenced). This job works through those rows
//! oldest first and removes each one once the bucket confirms the delete.

use std::sync::Arc;
use std::time::Duration;

use skillconnect_db::repositories::PendingDeleteRepo;
use skillconnect_db::DbPool;
use skillconnect_storage::ObjectStore;
use tokio_util::sync::CancellationToken;

/// Maximum intents processed per tick.
const BATCH_SIZE: i64 = 50;

/// Outcome of one sweep.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepStats {
    pub deleted: usize,
    pub failed: usize,
}

/// Run the sweeper loop until `cancel` is triggered.
pub async fn run(
    pool: DbPool,
    objects: Arc<dyn ObjectStore>,
    interval: Duration,
    cancel: CancellationToken,
) {
    tracing::info!(
        interval_secs = interval.as_secs(),
        "Object sweeper started"
    );

    let mut ticker = tokio::time::interval(interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Object sweeper stopping");
                break;
            }
            _ = ticker.tick() => {
                match sweep_once(&pool, objects.as_ref()).await {
                    Ok(stats) if stats.deleted + stats.failed > 0 => {
                        tracing::info!(
                            deleted = stats.deleted,
                            failed = stats.failed,
                            "Object sweeper: processed pending deletes"
                        );
                    }
                    Ok(_) => tracing::debug!("Object sweeper: nothing pending"),
                    Err(e) => tracing::error!(error = %e, "Object sweeper: sweep failed"),
                }
            }
        }
    }
}

/// Retry one batch of pending deletes.
///
/// A failed delete bumps the intent's attempt counter and keeps it for the
/// next sweep.
pub async fn sweep_once(
    pool: &DbPool,
    objects: &dyn ObjectStore,
) -> Result<SweepStats, sqlx::Error> {
    let mut stats = SweepStats::default();

    for pending in PendingDeleteRepo::list_oldest(pool, BATCH_SIZE).await? {
        match objects.delete_key(&pending.object_key).await {
            Ok(()) => {
                PendingDeleteRepo::remove_by_key(pool, &pending.object_key).await?;
                stats.deleted += 1;
            }
            Err(e) => {
                tracing::warn!(
                    key = %pending.object_key,
                    attempts = pending.attempts + 1,
                    error = %e,
                    "Object sweeper: delete failed"
                );
                PendingDeleteRepo::mark_failed(pool, pending.id, &e.to_string()).await?;
                stats.failed += 1;
            }
        }
    }

    Ok(stats)
}
