//! Repository for the `historial_busquedas` table.

use skillconnect_core::types::{DbId, Timestamp};
use sqlx::MySqlPool;

use crate::models::historial::Historial;

const COLUMNS: &str = "id, usuario_id, tipo_busqueda, termino, fecha";

pub struct HistorialRepo;

impl HistorialRepo {
    /// Record a search. `fecha` defaults to the database clock when `None`.
    pub async fn create(
        pool: &MySqlPool,
        usuario_id: DbId,
        tipo_busqueda: Option<&str>,
        termino: &str,
        fecha: Option<Timestamp>,
    ) -> Result<Historial, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO historial_busquedas (usuario_id, tipo_busqueda, termino, fecha) \
             VALUES (?, ?, ?, COALESCE(?, CURRENT_TIMESTAMP))",
        )
        .bind(usuario_id)
        .bind(tipo_busqueda)
        .bind(termino)
        .bind(fecha)
        .execute(pool)
        .await?;

        let query = format!("SELECT {COLUMNS} FROM historial_busquedas WHERE id = ?");
        sqlx::query_as::<_, Historial>(&query)
            .bind(result.last_insert_id() as DbId)
            .fetch_one(pool)
            .await
    }

    /// Search history of an account, newest first.
    pub async fn list_by_usuario(
        pool: &MySqlPool,
        usuario_id: DbId,
    ) -> Result<Vec<Historial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM historial_busquedas WHERE usuario_id = ? \
             ORDER BY fecha DESC, id DESC"
        );
        sqlx::query_as::<_, Historial>(&query)
            .bind(usuario_id)
            .fetch_all(pool)
            .await
    }
}
