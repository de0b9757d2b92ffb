//! Address and coordinates attachment for a persona.

use serde::Serialize;
use skillconnect_core::error::CoreError;
use skillconnect_core::geo::validate_pair;
use skillconnect_core::types::DbId;
use skillconnect_db::models::direccion::{Direccion, UpdateDireccion};
use skillconnect_db::models::geolocalizacion::Geolocalizacion;
use skillconnect_db::repositories::{DireccionRepo, GeolocalizacionRepo, PersonaRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Result of attaching coordinates.
#[derive(Debug, Serialize)]
pub struct CoordinatesAttached {
    pub direccion: Direccion,
    pub geolocalizacion: Geolocalizacion,
    /// Address fields were backfilled from a reverse geocode.
    pub enriched: bool,
}

async fn require_persona(state: &AppState, persona_id: DbId) -> AppResult<()> {
    PersonaRepo::find_by_id(&state.pool, persona_id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Persona",
            id: persona_id,
        }))
}

/// Create the persona's address from `input`, or patch the existing one.
pub async fn attach_address(
    state: &AppState,
    persona_id: DbId,
    input: &UpdateDireccion,
) -> AppResult<Direccion> {
    require_persona(state, persona_id).await?;
    let direccion = DireccionRepo::upsert_for_persona(&state.pool, persona_id, input).await?;
    tracing::info!(persona_id, id = direccion.id_direccion, "Address attached");
    Ok(direccion)
}

/// Store coordinates for the persona's address, creating an empty address
/// first when there is none.
///
/// When the address has no country, department or city, one reverse-geocode
/// lookup backfills them. A failed lookup is logged and reported as
/// `enriched: false`; it never fails the call.
pub async fn attach_coordinates(
    state: &AppState,
    persona_id: DbId,
    latitud: f64,
    longitud: f64,
) -> AppResult<CoordinatesAttached> {
    validate_pair(Some(latitud), Some(longitud))?;
    require_persona(state, persona_id).await?;

    let direccion =
        DireccionRepo::upsert_for_persona(&state.pool, persona_id, &UpdateDireccion::default())
            .await?;
    let geolocalizacion = GeolocalizacionRepo::upsert_for_direccion(
        &state.pool,
        direccion.id_direccion,
        latitud,
        longitud,
    )
    .await?;

    let (direccion, enriched) = if direccion.lacks_locality() {
        backfill_locality(state, direccion, latitud, longitud).await
    } else {
        (direccion, false)
    };

    tracing::info!(persona_id, enriched, "Coordinates attached");
    Ok(CoordinatesAttached {
        direccion,
        geolocalizacion,
        enriched,
    })
}

async fn backfill_locality(
    state: &AppState,
    direccion: Direccion,
    latitud: f64,
    longitud: f64,
) -> (Direccion, bool) {
    let found = match state.geocoder.reverse(latitud, longitud).await {
        Ok(found) if !found.is_empty() => found,
        Ok(_) => {
            tracing::debug!(latitud, longitud, "Reverse geocode found no address");
            return (direccion, false);
        }
        Err(e) => {
            tracing::warn!(latitud, longitud, error = %e, "Reverse geocode failed");
            return (direccion, false);
        }
    };

    let patch = found.fill_gaps(&direccion);
    if patch.is_empty() {
        return (direccion, false);
    }

    match DireccionRepo::update(&state.pool, direccion.id_direccion, &patch).await {
        Ok(Some(updated)) => (updated, true),
        Ok(None) => (direccion, false),
        Err(e) => {
            tracing::warn!(id = direccion.id_direccion, error = %e, "Address backfill failed");
            (direccion, false)
        }
    }
}
