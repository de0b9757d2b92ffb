//! Repository for the `usuarios` table.

use skillconnect_core::types::DbId;
use sqlx::MySqlPool;

use crate::models::usuario::{RegisteredUsuario, Usuario};

const COLUMNS: &str = "id_usuario, correo, contrasena_hash, activo, id_perfil, created_at";

/// Provides account registration and lookup.
pub struct UsuarioRepo;

impl UsuarioRepo {
    /// Create an empty persona and the account that owns it, atomically.
    ///
    /// A duplicate `correo` fails with a unique-violation and leaves no persona
    /// behind.
    pub async fn register(
        pool: &MySqlPool,
        correo: &str,
        contrasena_hash: &str,
    ) -> Result<RegisteredUsuario, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let persona = sqlx::query("INSERT INTO personas () VALUES ()")
            .execute(&mut *tx)
            .await?;
        let id_perfil = persona.last_insert_id() as DbId;

        let usuario = sqlx::query(
            "INSERT INTO usuarios (correo, contrasena_hash, id_perfil) VALUES (?, ?, ?)",
        )
        .bind(correo)
        .bind(contrasena_hash)
        .bind(id_perfil)
        .execute(&mut *tx)
        .await?;
        let id_usuario = usuario.last_insert_id() as DbId;

        tx.commit().await?;

        Ok(RegisteredUsuario {
            id_usuario,
            id_perfil,
        })
    }

    /// Find an account by email address (exact match).
    pub async fn find_by_correo(
        pool: &MySqlPool,
        correo: &str,
    ) -> Result<Option<Usuario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM usuarios WHERE correo = ?");
        sqlx::query_as::<_, Usuario>(&query)
            .bind(correo)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &MySqlPool, id: DbId) -> Result<Option<Usuario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM usuarios WHERE id_usuario = ?");
        sqlx::query_as::<_, Usuario>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Enable or disable login for an account.
    pub async fn set_activo(pool: &MySqlPool, id: DbId, activo: bool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE usuarios SET activo = ? WHERE id_usuario = ?")
            .bind(activo)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
