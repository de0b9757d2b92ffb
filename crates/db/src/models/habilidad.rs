//! Skill/service entry model and DTOs.

use serde::{Deserialize, Serialize};
use skillconnect_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `habilidades` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Habilidad {
    #[serde(rename = "id_Habilidad")]
    pub id_habilidad: DbId,
    #[serde(rename = "tipoEstado_Habilidad")]
    pub tipo_estado_habilidad: Option<String>,
    #[serde(rename = "nombre_Habilidad")]
    pub nombre_habilidad: String,
    #[serde(rename = "descripcion_Habilidad")]
    pub descripcion_habilidad: Option<String>,
    #[serde(rename = "id_Perfil_Persona")]
    pub id_perfil_persona: DbId,
    #[serde(rename = "id_categorias_Habilidades_Servicios")]
    pub id_categoria: Option<DbId>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHabilidad {
    pub tipo_estado: Option<String>,
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub id_persona: Option<DbId>,
    pub id_categoria: Option<DbId>,
}

/// Partial update. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHabilidad {
    #[serde(alias = "tipoEstado_Habilidad")]
    pub tipo_estado: Option<String>,
    #[serde(alias = "nombre_Habilidad")]
    pub nombre: Option<String>,
    #[serde(alias = "descripcion_Habilidad")]
    pub descripcion: Option<String>,
    pub id_persona: Option<DbId>,
    pub id_categoria: Option<DbId>,
}
