//! Read-only handlers for the skill category lookup table.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use skillconnect_core::error::CoreError;
use skillconnect_core::types::DbId;
use skillconnect_db::repositories::CategoriaRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiPath;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/categorias
pub async fn list_categorias(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = CategoriaRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::list(rows)))
}

/// GET /api/categorias/{id}
pub async fn get_categoria(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = CategoriaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Categoria",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(row)))
}
