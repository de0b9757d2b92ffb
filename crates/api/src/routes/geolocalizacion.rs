//! Route definitions for `/geolocalizacion`.
//!
//! ```text
//! GET    /                           list_geolocalizaciones
//! POST   /                           create_geolocalizacion
//! GET    /direccion/{direccion_id}   get_geolocalizacion_by_direccion
//! GET    /{id}                       get_geolocalizacion
//! PUT    /{id}                       update_geolocalizacion
//! DELETE /{id}                       delete_geolocalizacion
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::geolocalizacion;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(geolocalizacion::list_geolocalizaciones)
                .post(geolocalizacion::create_geolocalizacion),
        )
        .route(
            "/direccion/{direccion_id}",
            get(geolocalizacion::get_geolocalizacion_by_direccion),
        )
        .route(
            "/{id}",
            get(geolocalizacion::get_geolocalizacion)
                .put(geolocalizacion::update_geolocalizacion)
                .delete(geolocalizacion::delete_geolocalizacion),
        )
}
