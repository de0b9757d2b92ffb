//! Persona (profile) entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use skillconnect_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `personas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Persona {
    #[serde(rename = "id_Perfil_Persona")]
    pub id_perfil_persona: DbId,
    #[serde(rename = "nombre_Persona")]
    pub nombre_persona: String,
    #[serde(rename = "apellido_Persona")]
    pub apellido_persona: String,
    #[serde(rename = "fechaNac_Persona")]
    pub fecha_nac_persona: Option<NaiveDate>,
    #[serde(rename = "genero_Persona")]
    pub genero_persona: Option<String>,
    #[serde(rename = "estadoCivil_Persona")]
    pub estado_civil_persona: Option<String>,
    #[serde(rename = "tipoIdentificacion_Persona")]
    pub tipo_identificacion_persona: Option<String>,
    #[serde(rename = "identificacion_Persona")]
    pub identificacion_persona: Option<String>,
    #[serde(rename = "imagenUrl_Persona")]
    pub imagen_url_persona: Option<String>,
    #[serde(rename = "imagen1Url_Persona")]
    pub imagen1_url_persona: Option<String>,
    #[serde(rename = "imagen2Url_Persona")]
    pub imagen2_url_persona: Option<String>,
    #[serde(rename = "imagen3Url_Persona")]
    pub imagen3_url_persona: Option<String>,
    #[serde(rename = "descripcionPerfil_Persona")]
    pub descripcion_perfil_persona: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Persona {
    /// Current value of one of the four image references.
    pub fn image_url(&self, slot: skillconnect_core::persona::ImageSlot) -> Option<&str> {
        use skillconnect_core::persona::ImageSlot;
        let url = match slot {
            ImageSlot::Perfil => &self.imagen_url_persona,
            ImageSlot::Galeria1 => &self.imagen1_url_persona,
            ImageSlot::Galeria2 => &self.imagen2_url_persona,
            ImageSlot::Galeria3 => &self.imagen3_url_persona,
        };
        url.as_deref().filter(|u| !u.is_empty())
    }
}

/// Outcome of [`crate::repositories::PersonaRepo::swap_image`].
#[derive(Debug, Clone)]
pub struct ImageSwap {
    /// The row after the swap.
    pub persona: Persona,
    /// Non-empty URL the slot held before, unless it was the same URL.
    pub previous: Option<String>,
}

/// DTO for creating a persona.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersona {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub fecha_nac: Option<NaiveDate>,
    pub genero: Option<String>,
    pub estado_civil: Option<String>,
    pub tipo_identificacion: Option<String>,
    pub identificacion: Option<String>,
    pub imagen_url: Option<String>,
    pub imagen1_url: Option<String>,
    pub imagen2_url: Option<String>,
    pub imagen3_url: Option<String>,
    pub descripcion_perfil: Option<String>,
}

/// DTO for a partial persona update. Omitted fields keep their stored value.
///
/// Each field also accepts the row's column key (e.g. `genero_Persona`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePersona {
    #[serde(alias = "nombre_Persona")]
    pub nombre: Option<String>,
    #[serde(alias = "apellido_Persona")]
    pub apellido: Option<String>,
    #[serde(alias = "fechaNac_Persona")]
    pub fecha_nac: Option<NaiveDate>,
    #[serde(alias = "genero_Persona")]
    pub genero: Option<String>,
    #[serde(alias = "estadoCivil_Persona")]
    pub estado_civil: Option<String>,
    #[serde(alias = "tipoIdentificacion_Persona")]
    pub tipo_identificacion: Option<String>,
    #[serde(alias = "identificacion_Persona")]
    pub identificacion: Option<String>,
    #[serde(alias = "imagenUrl_Persona")]
    pub imagen_url: Option<String>,
    #[serde(alias = "imagen1Url_Persona")]
    pub imagen1_url: Option<String>,
    #[serde(alias = "imagen2Url_Persona")]
    pub imagen2_url: Option<String>,
    #[serde(alias = "imagen3Url_Persona")]
    pub imagen3_url: Option<String>,
    #[serde(alias = "descripcionPerfil_Persona")]
    pub descripcion_perfil: Option<String>,
}
