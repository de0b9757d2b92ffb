//! Repository for the `personas` table.

use skillconnect_core::persona::{ImageSlot, PersonaChoices};
use skillconnect_core::types::DbId;
use sqlx::MySqlPool;

use crate::models::persona::{CreatePersona, ImageSwap, Persona, UpdatePersona};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id_perfil_persona, nombre_persona, apellido_persona, fecha_nac_persona, \
    genero_persona, estado_civil_persona, tipo_identificacion_persona, identificacion_persona, \
    imagen_url_persona, imagen1_url_persona, imagen2_url_persona, imagen3_url_persona, \
    descripcion_perfil_persona, created_at, updated_at";

/// Provides CRUD operations for personas.
pub struct PersonaRepo;

impl PersonaRepo {
    /// Insert a new persona, returning the created row.
    ///
    /// `choices` carries the already-validated enumerated fields of `input`.
    pub async fn create(
        pool: &MySqlPool,
        input: &CreatePersona,
        choices: PersonaChoices,
    ) -> Result<Persona, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO personas (nombre_persona, apellido_persona, fecha_nac_persona, \
                genero_persona, estado_civil_persona, tipo_identificacion_persona, \
                identificacion_persona, imagen_url_persona, imagen1_url_persona, \
                imagen2_url_persona, imagen3_url_persona, descripcion_perfil_persona) \
             VALUES (COALESCE(?, ''), COALESCE(?, ''), ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&input.nombre)
        .bind(&input.apellido)
        .bind(input.fecha_nac)
        .bind(choices.genero.map(|g| g.name()))
        .bind(choices.estado_civil.map(|e| e.name()))
        .bind(choices.tipo_identificacion.map(|t| t.name()))
        .bind(&input.identificacion)
        .bind(&input.imagen_url)
        .bind(&input.imagen1_url)
        .bind(&input.imagen2_url)
        .bind(&input.imagen3_url)
        .bind(&input.descripcion_perfil)
        .execute(pool)
        .await?;

        let id = result.last_insert_id() as DbId;
        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a persona by its ID.
    pub async fn find_by_id(pool: &MySqlPool, id: DbId) -> Result<Option<Persona>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personas WHERE id_perfil_persona = ?");
        sqlx::query_as::<_, Persona>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all personas ordered by ID.
    pub async fn list(pool: &MySqlPool) -> Result<Vec<Persona>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personas ORDER BY id_perfil_persona");
        sqlx::query_as::<_, Persona>(&query).fetch_all(pool).await
    }

    /// Update a persona. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &MySqlPool,
        id: DbId,
        input: &UpdatePersona,
        choices: PersonaChoices,
    ) -> Result<Option<Persona>, sqlx::Error> {
        sqlx::query(
            "UPDATE personas SET \
                nombre_persona = COALESCE(?, nombre_persona), \
                apellido_persona = COALESCE(?, apellido_persona), \
                fecha_nac_persona = COALESCE(?, fecha_nac_persona), \
                genero_persona = COALESCE(?, genero_persona), \
                estado_civil_persona = COALESCE(?, estado_civil_persona), \
                tipo_identificacion_persona = COALESCE(?, tipo_identificacion_persona), \
                identificacion_persona = COALESCE(?, identificacion_persona), \
                imagen_url_persona = COALESCE(?, imagen_url_persona), \
                imagen1_url_persona = COALESCE(?, imagen1_url_persona), \
                imagen2_url_persona = COALESCE(?, imagen2_url_persona), \
                imagen3_url_persona = COALESCE(?, imagen3_url_persona), \
                descripcion_perfil_persona = COALESCE(?, descripcion_perfil_persona) \
             WHERE id_perfil_persona = ?",
        )
        .bind(&input.nombre)
        .bind(&input.apellido)
        .bind(input.fecha_nac)
        .bind(choices.genero.map(|g| g.name()))
        .bind(choices.estado_civil.map(|e| e.name()))
        .bind(choices.tipo_identificacion.map(|t| t.name()))
        .bind(&input.identificacion)
        .bind(&input.imagen_url)
        .bind(&input.imagen1_url)
        .bind(&input.imagen2_url)
        .bind(&input.imagen3_url)
        .bind(&input.descripcion_perfil)
        .bind(id)
        .execute(pool)
        .await?;

        Self::find_by_id(pool, id).await
    }

    /// Point one image slot at `url` (an empty string clears it).
    ///
    /// The slot is read under `FOR UPDATE` and rewritten in the same
    /// transaction, so `previous` is exactly the URL this call displaced even
    /// when several writers race on the same slot. Returns `None` if no row
    /// with the given `id` exists.
    pub async fn swap_image(
        pool: &MySqlPool,
        id: DbId,
        slot: ImageSlot,
        url: &str,
    ) -> Result<Option<ImageSwap>, sqlx::Error> {
        let column = slot.column();
        let mut tx = pool.begin().await?;

        let lock = format!("SELECT {column} FROM personas WHERE id_perfil_persona = ? FOR UPDATE");
        let current: Option<(Option<String>,)> = sqlx::query_as(&lock)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some((previous,)) = current else {
            return Ok(None);
        };

        let update = format!("UPDATE personas SET {column} = ? WHERE id_perfil_persona = ?");
        sqlx::query(&update).bind(url).bind(id).execute(&mut *tx).await?;

        let select = format!("SELECT {COLUMNS} FROM personas WHERE id_perfil_persona = ?");
        let persona = sqlx::query_as::<_, Persona>(&select)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(Some(ImageSwap {
            persona,
            previous: previous.filter(|u| !u.is_empty() && u != url),
        }))
    }

    /// Delete a persona. Dependent rows make this fail with a foreign-key error.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &MySqlPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM personas WHERE id_perfil_persona = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
