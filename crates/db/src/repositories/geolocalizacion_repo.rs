//! Repository for the `geolocalizaciones` table.

use skillconnect_core::types::DbId;
use sqlx::MySqlPool;

use crate::models::geolocalizacion::{CreateGeolocalizacion, Geolocalizacion, UpdateGeolocalizacion};

const COLUMNS: &str = "id_geolocalizacion, latitud, longitud, id_direccion";

pub struct GeolocalizacionRepo;

impl GeolocalizacionRepo {
    /// Insert coordinates for an address. `id_direccion` must be set.
    pub async fn create(
        pool: &MySqlPool,
        input: &CreateGeolocalizacion,
    ) -> Result<Geolocalizacion, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO geolocalizaciones (latitud, longitud, id_direccion) VALUES (?, ?, ?)",
        )
        .bind(input.latitud)
        .bind(input.longitud)
        .bind(input.id_direccion)
        .execute(pool)
        .await?;

        let id = result.last_insert_id() as DbId;
        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    pub async fn find_by_id(
        pool: &MySqlPool,
        id: DbId,
    ) -> Result<Option<Geolocalizacion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM geolocalizaciones WHERE id_geolocalizacion = ?");
        sqlx::query_as::<_, Geolocalizacion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The coordinates attached to an address, if any.
    pub async fn find_by_direccion(
        pool: &MySqlPool,
        direccion_id: DbId,
    ) -> Result<Option<Geolocalizacion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM geolocalizaciones WHERE id_direccion = ?");
        sqlx::query_as::<_, Geolocalizacion>(&query)
            .bind(direccion_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &MySqlPool) -> Result<Vec<Geolocalizacion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM geolocalizaciones ORDER BY id_geolocalizacion");
        sqlx::query_as::<_, Geolocalizacion>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update coordinates. Only non-`None` fields are applied.
    pub async fn update(
        pool: &MySqlPool,
        id: DbId,
        input: &UpdateGeolocalizacion,
    ) -> Result<Option<Geolocalizacion>, sqlx::Error> {
        sqlx::query(
            "UPDATE geolocalizaciones SET \
                latitud = COALESCE(?, latitud), \
                longitud = COALESCE(?, longitud), \
                id_direccion = COALESCE(?, id_direccion) \
             WHERE id_geolocalizacion = ?",
        )
        .bind(input.latitud)
        .bind(input.longitud)
        .bind(input.id_direccion)
        .bind(id)
        .execute(pool)
        .await?;

        Self::find_by_id(pool, id).await
    }

    /// Set the coordinates of an address, creating the row on first write.
    pub async fn upsert_for_direccion(
        pool: &MySqlPool,
        direccion_id: DbId,
        latitud: f64,
        longitud: f64,
    ) -> Result<Geolocalizacion, sqlx::Error> {
        sqlx::query(
            "INSERT INTO geolocalizaciones (latitud, longitud, id_direccion) VALUES (?, ?, ?) AS new \
             ON DUPLICATE KEY UPDATE latitud = new.latitud, longitud = new.longitud",
        )
        .bind(latitud)
        .bind(longitud)
        .bind(direccion_id)
        .execute(pool)
        .await?;

        Self::find_by_direccion(pool, direccion_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    pub async fn delete(pool: &MySqlPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM geolocalizaciones WHERE id_geolocalizacion = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
