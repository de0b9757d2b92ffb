//! Account routes, mounted directly under `/api`.
//!
//! ```text
//! POST   /registro                 registro
//! POST   /login                    login
//! POST   /login-jwt                login_jwt
//! GET    /verificar-sesion         verificar_sesion (Bearer token)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/registro", post(auth::registro))
        .route("/login", post(auth::login))
        .route("/login-jwt", post(auth::login_jwt))
        .route("/verificar-sesion", get(auth::verificar_sesion))
}
