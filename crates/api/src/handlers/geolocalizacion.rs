//! Handlers for the `/geolocalizacion` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use skillconnect_core::error::CoreError;
use skillconnect_core::geo::validate_pair;
use skillconnect_core::types::DbId;
use skillconnect_db::models::geolocalizacion::{CreateGeolocalizacion, UpdateGeolocalizacion};
use skillconnect_db::repositories::GeolocalizacionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::{ApiResponse, Created, MessageResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Geolocalizacion",
        id,
    })
}

/// GET /api/geolocalizacion
pub async fn list_geolocalizaciones(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows = GeolocalizacionRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::list(rows)))
}

/// GET /api/geolocalizacion/{id}
pub async fn get_geolocalizacion(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = GeolocalizacionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ApiResponse::ok(row)))
}

/// GET /api/geolocalizacion/direccion/{direccion_id}
///
/// `data` is `null` when the address has no coordinates.
pub async fn get_geolocalizacion_by_direccion(
    State(state): State<AppState>,
    ApiPath(direccion_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = GeolocalizacionRepo::find_by_direccion(&state.pool, direccion_id).await?;
    Ok(Json(ApiResponse::ok(row)))
}

/// POST /api/geolocalizacion
pub async fn create_geolocalizacion(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateGeolocalizacion>,
) -> AppResult<impl IntoResponse> {
    let direccion_id = input.id_direccion.ok_or(AppError::Core(CoreError::Validation(
        "idDireccion is required".into(),
    )))?;
    validate_pair(input.latitud, input.longitud)?;

    let row = GeolocalizacionRepo::create(&state.pool, &input).await?;
    tracing::info!(id = row.id_geolocalizacion, direccion_id, "Geolocalizacion created");

    let body = Created {
        id: row.id_geolocalizacion,
        row,
    };
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(body).with_message("Geolocalización creada exitosamente")),
    ))
}

/// PUT /api/geolocalizacion/{id}
///
/// Omitted coordinates keep their stored values.
pub async fn update_geolocalizacion(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateGeolocalizacion>,
) -> AppResult<impl IntoResponse> {
    validate_pair(input.latitud, input.longitud)?;

    let row = GeolocalizacionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Geolocalizacion updated");
    Ok(Json(
        ApiResponse::ok(row).with_message("Geolocalización actualizada exitosamente"),
    ))
}

/// DELETE /api/geolocalizacion/{id}
pub async fn delete_geolocalizacion(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !GeolocalizacionRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Geolocalizacion deleted");
    Ok(Json(MessageResponse::ok("Geolocalización eliminada exitosamente")))
}
