//! Search history entries.

use serde::{Deserialize, Serialize};
use skillconnect_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `historial_busquedas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Historial {
    pub id: DbId,
    pub usuario_id: DbId,
    pub tipo_busqueda: Option<String>,
    pub termino: String,
    pub fecha: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateHistorial {
    pub usuario_id: DbId,
    pub tipo_busqueda: Option<String>,
    pub termino: Option<String>,
    /// Defaults to the current time when omitted.
    pub fecha: Option<Timestamp>,
}
