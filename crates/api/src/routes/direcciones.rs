//! Route definitions for `/direcciones`.
//!
//! ```text
//! GET    /                         list_direcciones
//! POST   /                         create_direccion
//! GET    /persona/{persona_id}     get_direccion_by_persona
//! GET    /{id}                     get_direccion
//! PUT    /{id}                     update_direccion
//! DELETE /{id}                     delete_direccion
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::direcciones;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(direcciones::list_direcciones).post(direcciones::create_direccion),
        )
        .route(
            "/persona/{persona_id}",
            get(direcciones::get_direccion_by_persona),
        )
        .route(
            "/{id}",
            get(direcciones::get_direccion)
                .put(direcciones::update_direccion)
                .delete(direcciones::delete_direccion),
        )
}
