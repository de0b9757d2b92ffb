//! Handlers for bookmarked personas.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use skillconnect_core::error::CoreError;
use skillconnect_core::types::DbId;
use skillconnect_db::models::favorito::CreateFavorito;
use skillconnect_db::repositories::FavoritoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::{ApiResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/favoritos/{usuario_id}
pub async fn list_favoritos(
    State(state): State<AppState>,
    ApiPath(usuario_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let rows = FavoritoRepo::list_by_usuario(&state.pool, usuario_id).await?;
    Ok(Json(ApiResponse::list(rows)))
}

/// POST /api/favoritos
///
/// Bookmarking the same persona twice is a 409; unknown ids are a 404.
pub async fn create_favorito(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateFavorito>,
) -> AppResult<impl IntoResponse> {
    let row = FavoritoRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = row.id,
        usuario_id = row.usuario_id,
        persona_id = row.persona_id,
        "Favorito added"
    );
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(row).with_message("Favorito agregado correctamente")),
    ))
}

/// DELETE /api/favoritos/{id}
pub async fn delete_favorito(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !FavoritoRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Favorito",
            id,
        }));
    }
    Ok(Json(MessageResponse::ok("Favorito eliminado correctamente")))
}
