//! Route definitions for `/personas`, including the profile editor workflow.
//!
//! ```text
//! GET    /                         list_personas
//! POST   /                         create_persona
//! GET    /{id}                     get_persona
//! PUT    /{id}                     update_persona
//! PATCH  /{id}                     update_persona (single-field save)
//! DELETE /{id}                     delete_persona
//! GET    /{id}/perfil              get_profile
//! PUT    /{id}/direccion           attach_address
//! PUT    /{id}/geolocalizacion     attach_coordinates
//! PUT    /{id}/imagenes/{slot}     replace_image (multipart)
//! DELETE /{id}/imagenes/{slot}     clear_image
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{personas, profile};
use crate::router::image_body_limit;
use crate::state::AppState;

/// Persona routes -- mounted at `/personas`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(personas::list_personas).post(personas::create_persona),
        )
        .route(
            "/{id}",
            get(personas::get_persona)
                .put(personas::update_persona)
                .patch(personas::update_persona)
                .delete(personas::delete_persona),
        )
        .route("/{id}/perfil", get(profile::get_profile))
        .route("/{id}/direccion", put(profile::attach_address))
        .route("/{id}/geolocalizacion", put(profile::attach_coordinates))
        .route(
            "/{id}/imagenes/{slot}",
            put(profile::replace_image)
                .delete(profile::clear_image)
                .layer(image_body_limit()),
        )
}
