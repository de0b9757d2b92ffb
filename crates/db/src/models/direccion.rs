//! Postal address model and DTOs.

use serde::{Deserialize, Serialize};
use skillconnect_core::types::DbId;
use sqlx::FromRow;

/// A row from the `direcciones` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Direccion {
    #[serde(rename = "id_Direccion")]
    pub id_direccion: DbId,
    #[serde(rename = "ciudad_Direccion")]
    pub ciudad_direccion: Option<String>,
    #[serde(rename = "departamento_Direccion")]
    pub departamento_direccion: Option<String>,
    #[serde(rename = "pais_Direccion")]
    pub pais_direccion: Option<String>,
    #[serde(rename = "codigoPostal_Direccion")]
    pub codigo_postal_direccion: Option<String>,
    #[serde(rename = "id_Perfil_Persona")]
    pub id_perfil_persona: Option<DbId>,
}

impl Direccion {
    /// True when none of country, department or city is filled in.
    pub fn lacks_locality(&self) -> bool {
        [
            &self.pais_direccion,
            &self.departamento_direccion,
            &self.ciudad_direccion,
        ]
        .iter()
        .all(|f| f.as_deref().map_or(true, |v| v.trim().is_empty()))
    }
}

/// DTO for creating an address.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDireccion {
    pub ciudad: Option<String>,
    pub departamento: Option<String>,
    pub pais: Option<String>,
    pub codigo_postal: Option<String>,
    pub id_persona: Option<DbId>,
}

/// DTO for a partial address update; also the payload of the per-persona
/// address upsert (where `id_persona` is ignored).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDireccion {
    #[serde(alias = "ciudad_Direccion")]
    pub ciudad: Option<String>,
    #[serde(alias = "departamento_Direccion")]
    pub departamento: Option<String>,
    #[serde(alias = "pais_Direccion")]
    pub pais: Option<String>,
    #[serde(alias = "codigoPostal_Direccion")]
    pub codigo_postal: Option<String>,
    pub id_persona: Option<DbId>,
}

impl UpdateDireccion {
    pub fn is_empty(&self) -> bool {
        self.ciudad.is_none()
            && self.departamento.is_none()
            && self.pais.is_none()
            && self.codigo_postal.is_none()
    }
}
