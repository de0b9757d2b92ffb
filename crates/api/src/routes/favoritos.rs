//! Route definitions for `/favoritos` and `/historial`.
//!
//! ```text
//! FAVORITOS:
//! POST   /                         create_favorito
//! GET    /{usuario_id}             list_favoritos
//! DELETE /{id}                     delete_favorito
//!
//! HISTORIAL:
//! POST   /                         create_historial
//! GET    /{usuario_id}             list_historial
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{favoritos, historial};
use crate::state::AppState;

/// Favorito routes -- mounted at `/favoritos`.
///
/// `GET` and `DELETE` share the `/{id}` segment: the former reads it as an
/// account id, the latter as a bookmark id.
pub fn favorito_router() -> Router<AppState> {
    Router::new()
        .route("/", post(favoritos::create_favorito))
        .route(
            "/{id}",
            get(favoritos::list_favoritos).delete(favoritos::delete_favorito),
        )
}

/// Historial routes -- mounted at `/historial`.
pub fn historial_router() -> Router<AppState> {
    Router::new()
        .route("/", post(historial::create_historial))
        .route("/{usuario_id}", get(historial::list_historial))
}
