//! Durable intents to delete objects from the image bucket.

use serde::Serialize;
use skillconnect_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `pending_object_deletes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PendingObjectDelete {
    pub id: DbId,
    pub object_key: String,
    pub attempts: i32,
    pub last_error: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
