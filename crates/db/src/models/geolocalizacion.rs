//! Coordinates model and DTOs.

use serde::{Deserialize, Serialize};
use skillconnect_core::types::DbId;
use sqlx::FromRow;

/// A row from the `geolocalizaciones` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Geolocalizacion {
    #[serde(rename = "id_Geolocalizacion")]
    pub id_geolocalizacion: DbId,
    #[serde(rename = "latitud_Geolocalizacion")]
    pub latitud: Option<f64>,
    #[serde(rename = "Longitud_Geolocalizacion")]
    pub longitud: Option<f64>,
    #[serde(rename = "id_Direccion")]
    pub id_direccion: DbId,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGeolocalizacion {
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
    pub id_direccion: Option<DbId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGeolocalizacion {
    #[serde(alias = "latitud_Geolocalizacion")]
    pub latitud: Option<f64>,
    #[serde(alias = "Longitud_Geolocalizacion")]
    pub longitud: Option<f64>,
    pub id_direccion: Option<DbId>,
}
