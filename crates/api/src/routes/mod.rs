pub mod auth;
pub mod categorias;
pub mod direcciones;
pub mod favoritos;
pub mod geolocalizacion;
pub mod habilidades;
pub mod health;
pub mod personas;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /registro, /login, /login-jwt, /verificar-sesion   accounts
///
/// /personas                                           list, create
/// /personas/{id}                                      get, update (PUT/PATCH), delete
/// /personas/{id}/perfil                               profile snapshot
/// /personas/{id}/direccion                            address upsert (PUT)
/// /personas/{id}/geolocalizacion                      coordinates upsert (PUT)
/// /personas/{id}/imagenes/{slot}                      replace (PUT), clear (DELETE)
///
/// /direcciones                                        list, create
/// /direcciones/persona/{persona_id}                   address of a persona
/// /direcciones/{id}                                   get, update, delete
///
/// /geolocalizacion                                    list, create
/// /geolocalizacion/direccion/{direccion_id}           coordinates of an address
/// /geolocalizacion/{id}                               get, update, delete
///
/// /habilidades                                        list, create
/// /habilidades/persona/{persona_id}                   skills of a persona
/// /habilidades/{id}                                   get, update, delete
///
/// /categorias                                         list
/// /categorias/{id}                                    get
///
/// /upload                                             upload (POST), delete (DELETE)
/// /upload/images                                      list bucket
///
/// /favoritos                                          create
/// /favoritos/{id}                                     list by account (GET), delete
///
/// /historial                                          create
/// /historial/{usuario_id}                             list by account
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/personas", personas::router())
        .nest("/direcciones", direcciones::router())
        .nest("/geolocalizacion", geolocalizacion::router())
        .nest("/habilidades", habilidades::router())
        .nest("/categorias", categorias::router())
        .nest("/upload", upload::router())
        .nest("/favoritos", favoritos::favorito_router())
        .nest("/historial", favoritos::historial_router())
}
