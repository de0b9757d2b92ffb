//! Handlers for the `/direcciones` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use skillconnect_core::error::CoreError;
use skillconnect_core::types::DbId;
use skillconnect_db::models::direccion::{CreateDireccion, UpdateDireccion};
use skillconnect_db::repositories::DireccionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::{ApiResponse, Created, MessageResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Direccion",
        id,
    })
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// GET /api/direcciones
pub async fn list_direcciones(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let direcciones = DireccionRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::list(direcciones)))
}

/// GET /api/direcciones/{id}
pub async fn get_direccion(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let direccion = DireccionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ApiResponse::ok(direccion)))
}

/// GET /api/direcciones/persona/{persona_id}
///
/// `data` is `null` when the persona has no address.
pub async fn get_direccion_by_persona(
    State(state): State<AppState>,
    ApiPath(persona_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let direccion = DireccionRepo::find_by_persona(&state.pool, persona_id).await?;
    Ok(Json(ApiResponse::ok(direccion)))
}

/// POST /api/direcciones
///
/// At least one of `ciudad`, `departamento` or `pais` must be supplied.
pub async fn create_direccion(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateDireccion>,
) -> AppResult<impl IntoResponse> {
    if !(has_text(&input.ciudad) || has_text(&input.departamento) || has_text(&input.pais)) {
        return Err(AppError::Core(CoreError::Validation(
            "At least one of ciudad, departamento or pais is required".into(),
        )));
    }

    let direccion = DireccionRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = direccion.id_direccion,
        persona_id = ?direccion.id_perfil_persona,
        "Direccion created"
    );

    let body = Created {
        id: direccion.id_direccion,
        row: direccion,
    };
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(body).with_message("Dirección creada exitosamente")),
    ))
}

/// PUT /api/direcciones/{id}
pub async fn update_direccion(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateDireccion>,
) -> AppResult<impl IntoResponse> {
    let direccion = DireccionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Direccion updated");
    Ok(Json(ApiResponse::ok(direccion).with_message(format!(
        "Dirección con ID {id} actualizada exitosamente"
    ))))
}

/// DELETE /api/direcciones/{id}
///
/// The address's coordinates are removed with it.
pub async fn delete_direccion(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !DireccionRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Direccion deleted");
    Ok(Json(MessageResponse::ok(format!(
        "Dirección con ID {id} eliminada exitosamente"
    ))))
}
