//! Full profile read used by the profile editor on load.

use serde::Serialize;
use skillconnect_core::error::CoreError;
use skillconnect_core::habilidad::TipoEstado;
use skillconnect_core::types::DbId;
use skillconnect_db::models::direccion::Direccion;
use skillconnect_db::models::geolocalizacion::Geolocalizacion;
use skillconnect_db::models::habilidad::Habilidad;
use skillconnect_db::models::persona::Persona;
use skillconnect_db::repositories::{
    DireccionRepo, GeolocalizacionRepo, HabilidadRepo, PersonaRepo,
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// A persona's skill entries grouped by direction.
#[derive(Debug, Default, Serialize)]
pub struct HabilidadesPorTipo {
    pub ofrecidas: Vec<Habilidad>,
    pub necesitadas: Vec<Habilidad>,
    /// Entries stored without a direction.
    pub otras: Vec<Habilidad>,
}

impl HabilidadesPorTipo {
    pub fn split(habilidades: Vec<Habilidad>) -> Self {
        let mut grouped = Self::default();
        for h in habilidades {
            let tipo = h
                .tipo_estado_habilidad
                .as_deref()
                .and_then(|t| TipoEstado::from_name(t).ok());
            match tipo {
                Some(TipoEstado::Ofrece) => grouped.ofrecidas.push(h),
                Some(TipoEstado::Necesita) => grouped.necesitadas.push(h),
                None => grouped.otras.push(h),
            }
        }
        grouped
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileSnapshot {
    pub persona: Persona,
    pub direccion: Option<Direccion>,
    pub geolocalizacion: Option<Geolocalizacion>,
    pub habilidades: HabilidadesPorTipo,
}

pub async fn load_profile(state: &AppState, persona_id: DbId) -> AppResult<ProfileSnapshot> {
    let persona = PersonaRepo::find_by_id(&state.pool, persona_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Persona",
            id: persona_id,
        }))?;

    let direccion = DireccionRepo::find_by_persona(&state.pool, persona_id).await?;
    let geolocalizacion = match &direccion {
        Some(d) => GeolocalizacionRepo::find_by_direccion(&state.pool, d.id_direccion).await?,
        None => None,
    };
    let habilidades = HabilidadesPorTipo::split(
        HabilidadRepo::list_by_persona(&state.pool, persona_id).await?,
    );

    Ok(ProfileSnapshot {
        persona,
        direccion,
        geolocalizacion,
        habilidades,
    })
}
