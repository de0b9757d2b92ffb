//! Handlers for the `/habilidades` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use skillconnect_core::choice::parse_optional;
use skillconnect_core::error::CoreError;
use skillconnect_core::fields::require_non_blank;
use skillconnect_core::habilidad::TipoEstado;
use skillconnect_core::types::DbId;
use skillconnect_db::models::habilidad::{CreateHabilidad, UpdateHabilidad};
use skillconnect_db::repositories::HabilidadRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::{ApiResponse, Created, MessageResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Habilidad",
        id,
    })
}

/// GET /api/habilidades
pub async fn list_habilidades(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = HabilidadRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::list(rows)))
}

/// GET /api/habilidades/{id}
pub async fn get_habilidad(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = HabilidadRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ApiResponse::ok(row)))
}

/// GET /api/habilidades/persona/{persona_id}
///
/// An empty list when the persona has no entries.
pub async fn list_habilidades_by_persona(
    State(state): State<AppState>,
    ApiPath(persona_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let rows = HabilidadRepo::list_by_persona(&state.pool, persona_id).await?;
    Ok(Json(ApiResponse::list(rows)))
}

/// POST /api/habilidades
pub async fn create_habilidad(
    State(state): State<AppState>,
    ApiJson(mut input): ApiJson<CreateHabilidad>,
) -> AppResult<impl IntoResponse> {
    input.nombre = Some(require_non_blank("nombre", input.nombre.as_deref())?.to_string());
    let persona_id = input.id_persona.ok_or(AppError::Core(CoreError::Validation(
        "idPersona is required".into(),
    )))?;
    let tipo_estado = parse_optional(input.tipo_estado.as_deref(), TipoEstado::from_name)?;

    let row = HabilidadRepo::create(&state.pool, &input, tipo_estado).await?;
    tracing::info!(id = row.id_habilidad, persona_id, "Habilidad created");

    let body = Created {
        id: row.id_habilidad,
        row,
    };
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(body).with_message("Habilidad creada exitosamente")),
    ))
}

/// PUT /api/habilidades/{id}
///
/// Omitted fields keep their stored values; a supplied `nombre` must not be
/// blank.
pub async fn update_habilidad(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(mut input): ApiJson<UpdateHabilidad>,
) -> AppResult<impl IntoResponse> {
    if input.nombre.is_some() {
        input.nombre = Some(require_non_blank("nombre", input.nombre.as_deref())?.to_string());
    }
    let tipo_estado = parse_optional(input.tipo_estado.as_deref(), TipoEstado::from_name)?;

    let row = HabilidadRepo::update(&state.pool, id, &input, tipo_estado)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Habilidad updated");
    Ok(Json(
        ApiResponse::ok(row).with_message("Habilidad actualizada exitosamente"),
    ))
}

/// DELETE /api/habilidades/{id}
pub async fn delete_habilidad(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !HabilidadRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Habilidad deleted");
    Ok(Json(MessageResponse::ok("Habilidad eliminada exitosamente")))
}
