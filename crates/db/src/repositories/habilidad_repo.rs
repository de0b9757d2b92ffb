//! Repository for the `habilidades` table.

use skillconnect_core::habilidad::TipoEstado;
use skillconnect_core::types::DbId;
use sqlx::MySqlPool;

use crate::models::habilidad::{CreateHabilidad, Habilidad, UpdateHabilidad};

const COLUMNS: &str = "id_habilidad, tipo_estado_habilidad, nombre_habilidad, \
    descripcion_habilidad, id_perfil_persona, id_categoria, created_at";

/// Provides CRUD operations for skill entries.
pub struct HabilidadRepo;

impl HabilidadRepo {
    /// Insert a new skill entry.
    ///
    /// `input.nombre` and `input.id_persona` are expected to be validated.
    pub async fn create(
        pool: &MySqlPool,
        input: &CreateHabilidad,
        tipo_estado: Option<TipoEstado>,
    ) -> Result<Habilidad, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO habilidades (tipo_estado_habilidad, nombre_habilidad, \
                descripcion_habilidad, id_perfil_persona, id_categoria) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(tipo_estado.map(|t| t.name()))
        .bind(&input.nombre)
        .bind(&input.descripcion)
        .bind(input.id_persona)
        .bind(input.id_categoria)
        .execute(pool)
        .await?;

        let id = result.last_insert_id() as DbId;
        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    pub async fn find_by_id(pool: &MySqlPool, id: DbId) -> Result<Option<Habilidad>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM habilidades WHERE id_habilidad = ?");
        sqlx::query_as::<_, Habilidad>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &MySqlPool) -> Result<Vec<Habilidad>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM habilidades ORDER BY id_habilidad");
        sqlx::query_as::<_, Habilidad>(&query).fetch_all(pool).await
    }

    /// All skill entries of a persona, oldest first.
    pub async fn list_by_persona(
        pool: &MySqlPool,
        persona_id: DbId,
    ) -> Result<Vec<Habilidad>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM habilidades WHERE id_perfil_persona = ? ORDER BY id_habilidad"
        );
        sqlx::query_as::<_, Habilidad>(&query)
            .bind(persona_id)
            .fetch_all(pool)
            .await
    }

    /// Update a skill entry. Only non-`None` fields are applied.
    pub async fn update(
        pool: &MySqlPool,
        id: DbId,
        input: &UpdateHabilidad,
        tipo_estado: Option<TipoEstado>,
    ) -> Result<Option<Habilidad>, sqlx::Error> {
        sqlx::query(
            "UPDATE habilidades SET \
                tipo_estado_habilidad = COALESCE(?, tipo_estado_habilidad), \
                nombre_habilidad = COALESCE(?, nombre_habilidad), \
                descripcion_habilidad = COALESCE(?, descripcion_habilidad), \
                id_perfil_persona = COALESCE(?, id_perfil_persona), \
                id_categoria = COALESCE(?, id_categoria) \
             WHERE id_habilidad = ?",
        )
        .bind(tipo_estado.map(|t| t.name()))
        .bind(&input.nombre)
        .bind(&input.descripcion)
        .bind(input.id_persona)
        .bind(input.id_categoria)
        .bind(id)
        .execute(pool)
        .await?;

        Self::find_by_id(pool, id).await
    }

    pub async fn delete(pool: &MySqlPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM habilidades WHERE id_habilidad = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
