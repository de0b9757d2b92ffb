//! Skill category lookup rows.

use serde::Serialize;
use skillconnect_core::types::DbId;
use sqlx::FromRow;

/// A row from the `categorias_habilidades_servicios` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Categoria {
    #[serde(rename = "id_categoria_Habilidad_Servicio")]
    pub id_categoria: DbId,
    #[serde(rename = "nombre_categoria_Habilidad")]
    pub nombre_categoria: String,
}
