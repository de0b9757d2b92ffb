//! Handlers for the profile editor workflow under `/personas/{id}`.
//!
//! Thin wrappers over [`crate::sync`]; see that module for the ordering
//! guarantees between the database and the bucket.

use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use skillconnect_core::error::CoreError;
use skillconnect_core::persona::ImageSlot;
use skillconnect_core::types::DbId;
use skillconnect_db::models::direccion::UpdateDireccion;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::handlers::upload::read_image_form;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::sync::{images, location, snapshot};

#[derive(Debug, Deserialize)]
pub struct CoordinatesRequest {
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
}

fn required(field: &str, value: Option<f64>) -> Result<f64, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

/// GET /api/personas/{id}/perfil
pub async fn get_profile(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let profile = snapshot::load_profile(&state, id).await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// PUT /api/personas/{id}/imagenes/{slot}
///
/// Multipart `image`. The previous image of the slot is looked up from the
/// persona row, never taken from the request.
pub async fn replace_image(
    State(state): State<AppState>,
    ApiPath((id, slot)): ApiPath<(DbId, String)>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let slot = ImageSlot::from_name(&slot)?;
    let mut form = read_image_form(multipart).await?;
    let upload = form.require_image()?;

    let replaced = images::replace_image(&state, id, slot, upload).await?;
    Ok(Json(
        ApiResponse::ok(replaced).with_message("Imagen actualizada exitosamente"),
    ))
}

/// DELETE /api/personas/{id}/imagenes/{slot}
pub async fn clear_image(
    State(state): State<AppState>,
    ApiPath((id, slot)): ApiPath<(DbId, String)>,
) -> AppResult<impl IntoResponse> {
    let slot = ImageSlot::from_name(&slot)?;
    let persona = images::clear_image(&state, id, slot).await?;
    Ok(Json(
        ApiResponse::ok(persona).with_message("Imagen eliminada exitosamente"),
    ))
}

/// PUT /api/personas/{id}/direccion
///
/// Creates the address on first use, patches it afterwards.
pub async fn attach_address(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateDireccion>,
) -> AppResult<impl IntoResponse> {
    if input.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "At least one address field is required".into(),
        )));
    }
    let direccion = location::attach_address(&state, id, &input).await?;
    Ok(Json(ApiResponse::ok(direccion)))
}

/// PUT /api/personas/{id}/geolocalizacion
pub async fn attach_coordinates(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<CoordinatesRequest>,
) -> AppResult<impl IntoResponse> {
    let latitud = required("latitud", input.latitud)?;
    let longitud = required("longitud", input.longitud)?;

    let attached = location::attach_coordinates(&state, id, latitud, longitud).await?;
    Ok(Json(ApiResponse::ok(attached)))
}
