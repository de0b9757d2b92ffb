//! Route definitions for `/habilidades`.
//!
//! ```text
//! GET    /                         list_habilidades
//! POST   /                         create_habilidad
//! GET    /persona/{persona_id}     list_habilidades_by_persona
//! GET    /{id}                     get_habilidad
//! PUT    /{id}                     update_habilidad
//! DELETE /{id}                     delete_habilidad
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::habilidades;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(habilidades::list_habilidades).post(habilidades::create_habilidad),
        )
        .route(
            "/persona/{persona_id}",
            get(habilidades::list_habilidades_by_persona),
        )
        .route(
            "/{id}",
            get(habilidades::get_habilidad)
                .put(habilidades::update_habilidad)
                .delete(habilidades::delete_habilidad),
        )
}
