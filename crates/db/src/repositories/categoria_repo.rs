//! Repository for the `categorias_habilidades_servicios` lookup table.

use skillconnect_core::types::DbId;
use sqlx::MySqlPool;

use crate::models::categoria::Categoria;

const COLUMNS: &str = "id_categoria, nombre_categoria";

/// Read-only access to skill categories.
pub struct CategoriaRepo;

impl CategoriaRepo {
    /// List all categories ordered by name.
    pub async fn list(pool: &MySqlPool) -> Result<Vec<Categoria>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM categorias_habilidades_servicios ORDER BY nombre_categoria");
        sqlx::query_as::<_, Categoria>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &MySqlPool, id: DbId) -> Result<Option<Categoria>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM categorias_habilidades_servicios WHERE id_categoria = ?");
        sqlx::query_as::<_, Categoria>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
