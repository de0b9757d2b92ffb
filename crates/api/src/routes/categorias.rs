//! Route definitions for `/categorias` (read-only).
//!
//! ```text
//! GET    /                         list_categorias
//! GET    /{id}                     get_categoria
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::categorias;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(categorias::list_categorias))
        .route("/{id}", get(categorias::get_categoria))
}
