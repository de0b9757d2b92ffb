//! Handlers for per-account search history.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use skillconnect_core::fields::{require_non_blank, trimmed_or_none};
use skillconnect_core::types::DbId;
use skillconnect_db::models::historial::CreateHistorial;
use skillconnect_db::repositories::HistorialRepo;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/historial/{usuario_id}
///
/// Newest first.
pub async fn list_historial(
    State(state): State<AppState>,
    ApiPath(usuario_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let rows = HistorialRepo::list_by_usuario(&state.pool, usuario_id).await?;
    Ok(Json(ApiResponse::list(rows)))
}

/// POST /api/historial
pub async fn create_historial(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateHistorial>,
) -> AppResult<impl IntoResponse> {
    let termino = require_non_blank("termino", input.termino.as_deref())?;
    let tipo = trimmed_or_none(input.tipo_busqueda.as_deref());

    let row = HistorialRepo::create(
        &state.pool,
        input.usuario_id,
        tipo.as_deref(),
        termino,
        input.fecha,
    )
    .await?;
    tracing::debug!(id = row.id, usuario_id = row.usuario_id, "Search recorded");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(row).with_message("Búsqueda registrada correctamente")),
    ))
}
