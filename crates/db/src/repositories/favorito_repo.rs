//! Repository for the `favoritos` table.

use skillconnect_core::types::DbId;
use sqlx::MySqlPool;

use crate::models::favorito::{CreateFavorito, Favorito};

const COLUMNS: &str = "id, usuario_id, persona_id, creado_en";

pub struct FavoritoRepo;

impl FavoritoRepo {
    /// Bookmark a persona. A repeated pair fails with a unique-violation.
    pub async fn create(pool: &MySqlPool, input: &CreateFavorito) -> Result<Favorito, sqlx::Error> {
        let result = sqlx::query("INSERT INTO favoritos (usuario_id, persona_id) VALUES (?, ?)")
            .bind(input.usuario_id)
            .bind(input.persona_id)
            .execute(pool)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM favoritos WHERE id = ?");
        sqlx::query_as::<_, Favorito>(&query)
            .bind(result.last_insert_id() as DbId)
            .fetch_one(pool)
            .await
    }

    /// Bookmarks of an account, newest first.
    pub async fn list_by_usuario(
        pool: &MySqlPool,
        usuario_id: DbId,
    ) -> Result<Vec<Favorito>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM favoritos WHERE usuario_id = ? ORDER BY creado_en DESC, id DESC"
        );
        sqlx::query_as::<_, Favorito>(&query)
            .bind(usuario_id)
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &MySqlPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favoritos WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
