//! Route definitions for `/upload`.
//!
//! ```text
//! POST   /                         upload_image (multipart)
//! DELETE /                         delete_image
//! GET    /images                   list_images
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::upload;
use crate::router::image_body_limit;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(upload::upload_image)
                .delete(upload::delete_image)
                .layer(image_body_limit()),
        )
        .route("/images", get(upload::list_images))
}
