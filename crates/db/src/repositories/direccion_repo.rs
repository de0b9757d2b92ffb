//! Repository for the `direcciones` table.

use skillconnect_core::types::DbId;
use sqlx::MySqlPool;

use crate::models::direccion::{CreateDireccion, Direccion, UpdateDireccion};

const COLUMNS: &str = "id_direccion, ciudad_direccion, departamento_direccion, pais_direccion, \
    codigo_postal_direccion, id_perfil_persona";

/// Provides CRUD and per-owner upsert operations for addresses.
pub struct DireccionRepo;

impl DireccionRepo {
    /// Insert a new address, returning the created row.
    pub async fn create(pool: &MySqlPool, input: &CreateDireccion) -> Result<Direccion, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO direcciones (ciudad_direccion, departamento_direccion, pais_direccion, \
                codigo_postal_direccion, id_perfil_persona) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&input.ciudad)
        .bind(&input.departamento)
        .bind(&input.pais)
        .bind(&input.codigo_postal)
        .bind(input.id_persona)
        .execute(pool)
        .await?;

        let id = result.last_insert_id() as DbId;
        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    pub async fn find_by_id(pool: &MySqlPool, id: DbId) -> Result<Option<Direccion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM direcciones WHERE id_direccion = ?");
        sqlx::query_as::<_, Direccion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The address owned by a persona, if any.
    pub async fn find_by_persona(
        pool: &MySqlPool,
        persona_id: DbId,
    ) -> Result<Option<Direccion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM direcciones WHERE id_perfil_persona = ?");
        sqlx::query_as::<_, Direccion>(&query)
            .bind(persona_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &MySqlPool) -> Result<Vec<Direccion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM direcciones ORDER BY id_direccion");
        sqlx::query_as::<_, Direccion>(&query).fetch_all(pool).await
    }

    /// Update an address. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &MySqlPool,
        id: DbId,
        input: &UpdateDireccion,
    ) -> Result<Option<Direccion>, sqlx::Error> {
        sqlx::query(
            "UPDATE direcciones SET \
                ciudad_direccion = COALESCE(?, ciudad_direccion), \
                departamento_direccion = COALESCE(?, departamento_direccion), \
                pais_direccion = COALESCE(?, pais_direccion), \
                codigo_postal_direccion = COALESCE(?, codigo_postal_direccion), \
                id_perfil_persona = COALESCE(?, id_perfil_persona) \
             WHERE id_direccion = ?",
        )
        .bind(&input.ciudad)
        .bind(&input.departamento)
        .bind(&input.pais)
        .bind(&input.codigo_postal)
        .bind(input.id_persona)
        .bind(id)
        .execute(pool)
        .await?;

        Self::find_by_id(pool, id).await
    }

    /// Create the persona's address from `input`, or patch the existing one.
    ///
    /// A single statement keyed on the unique owner column, so two concurrent
    /// first edits converge on one row. Fields left `None` keep their stored
    /// value; an all-`None` input just guarantees the row exists.
    pub async fn upsert_for_persona(
        pool: &MySqlPool,
        persona_id: DbId,
        input: &UpdateDireccion,
    ) -> Result<Direccion, sqlx::Error> {
        sqlx::query(
            "INSERT INTO direcciones (ciudad_direccion, departamento_direccion, pais_direccion, \
                codigo_postal_direccion, id_perfil_persona) \
             VALUES (?, ?, ?, ?, ?) AS new \
             ON DUPLICATE KEY UPDATE \
                ciudad_direccion = COALESCE(new.ciudad_direccion, direcciones.ciudad_direccion), \
                departamento_direccion = \
                    COALESCE(new.departamento_direccion, direcciones.departamento_direccion), \
                pais_direccion = COALESCE(new.pais_direccion, direcciones.pais_direccion), \
                codigo_postal_direccion = \
                    COALESCE(new.codigo_postal_direccion, direcciones.codigo_postal_direccion)",
        )
        .bind(&input.ciudad)
        .bind(&input.departamento)
        .bind(&input.pais)
        .bind(&input.codigo_postal)
        .bind(persona_id)
        .execute(pool)
        .await?;

        Self::find_by_persona(pool, persona_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Delete an address. Its coordinates are removed with it.
    pub async fn delete(pool: &MySqlPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM direcciones WHERE id_direccion = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
