//! Handlers for the `/personas` resource.
//!
//! The profile workflow endpoints nested under `/personas/{id}` live in
//! [`super::profile`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use skillconnect_core::error::CoreError;
use skillconnect_core::fields::require_non_blank;
use skillconnect_core::persona::PersonaChoices;
use skillconnect_core::types::DbId;
use skillconnect_db::models::persona::{CreatePersona, UpdatePersona};
use skillconnect_db::repositories::PersonaRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::{ApiResponse, Created, MessageResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Persona",
        id,
    })
}

/// Reject a supplied text field that is blank.
fn reject_blank(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(_) => require_non_blank(field, value).map(|_| ()),
        None => Ok(()),
    }
}

/// GET /api/personas
pub async fn list_personas(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let personas = PersonaRepo::list(&state.pool).await?;
    tracing::debug!(count = personas.len(), "Listed personas");
    Ok(Json(ApiResponse::list(personas)))
}

/// GET /api/personas/{id}
pub async fn get_persona(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let persona = PersonaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ApiResponse::ok(persona)))
}

/// POST /api/personas
///
/// `nombre`, `apellido` and `identificacion` are required. Enumerated fields
/// are checked against their allow-lists before anything is written.
pub async fn create_persona(
    State(state): State<AppState>,
    ApiJson(mut input): ApiJson<CreatePersona>,
) -> AppResult<impl IntoResponse> {
    input.nombre = Some(require_non_blank("nombre", input.nombre.as_deref())?.to_string());
    input.apellido = Some(require_non_blank("apellido", input.apellido.as_deref())?.to_string());
    input.identificacion =
        Some(require_non_blank("identificacion", input.identificacion.as_deref())?.to_string());

    let choices = PersonaChoices::parse(
        input.genero.as_deref(),
        input.estado_civil.as_deref(),
        input.tipo_identificacion.as_deref(),
    )?;

    let persona = PersonaRepo::create(&state.pool, &input, choices).await?;
    tracing::info!(id = persona.id_perfil_persona, "Persona created");

    let body = Created {
        id: persona.id_perfil_persona,
        row: persona,
    };
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(body).with_message("Persona creada exitosamente")),
    ))
}

/// PUT|PATCH /api/personas/{id}
///
/// Partial update: omitted fields keep their stored values. This is also the
/// single-field save used by the profile editor.
pub async fn update_persona(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdatePersona>,
) -> AppResult<impl IntoResponse> {
    reject_blank("nombre", input.nombre.as_deref())?;
    reject_blank("apellido", input.apellido.as_deref())?;
    reject_blank("identificacion", input.identificacion.as_deref())?;

    let choices = PersonaChoices::parse(
        input.genero.as_deref(),
        input.estado_civil.as_deref(),
        input.tipo_identificacion.as_deref(),
    )?;

    let persona = PersonaRepo::update(&state.pool, id, &input, choices)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Persona updated");

    Ok(Json(ApiResponse::ok(persona).with_message(format!(
        "Persona con ID {id} actualizada exitosamente"
    ))))
}

/// DELETE /api/personas/{id}
///
/// A persona still referenced by an address, skill or account cannot be
/// deleted (409).
pub async fn delete_persona(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !PersonaRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Persona deleted");
    Ok(Json(MessageResponse::ok(format!(
        "Persona con ID {id} eliminada exitosamente"
    ))))
}
