//! Bookmarked personas per account.

use serde::{Deserialize, Serialize};
use skillconnect_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `favoritos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favorito {
    pub id: DbId,
    pub usuario_id: DbId,
    pub persona_id: DbId,
    pub creado_en: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFavorito {
    pub usuario_id: DbId,
    pub persona_id: DbId,
}
