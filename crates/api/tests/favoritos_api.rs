//! HTTP-level integration tests for `/api/favoritos` and `/api/historial`.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_persona, delete, get, post_json};
use serde_json::json;
use sqlx::MySqlPool;

/// Register an account and return `(usuario_id, perfil_id)`.
async fn register(app: axum::Router, correo: &str) -> (i64, i64) {
    let response = post_json(
        app,
        "/api/registro",
        json!({ "correo": correo, "contrasena": "secreto123" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    (
        json["data"]["id_usuario"].as_i64().unwrap(),
        json["data"]["id_perfil"].as_i64().unwrap(),
    )
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_favorito_lifecycle(pool: MySqlPool) {
    let app = common::build_test_app(pool);
    let (usuario_id, _) = register(app.clone(), "ana@example.com").await;
    let persona_id = create_persona(app.clone(), "30111222").await;

    let body = json!({ "usuario_id": usuario_id, "persona_id": persona_id });
    let response = post_json(app.clone(), "/api/favoritos", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = post_json(app.clone(), "/api/favoritos", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(get(app.clone(), &format!("/api/favoritos/{usuario_id}")).await).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["persona_id"], persona_id);

    let response = delete(app.clone(), &format!("/api/favoritos/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = delete(app, &format!("/api/favoritos/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_favorito_with_unknown_ids_is_404(pool: MySqlPool) {
    let app = common::build_test_app(pool);
    let persona_id = create_persona(app.clone(), "30111222").await;

    let response = post_json(
        app,
        "/api/favoritos",
        json!({ "usuario_id": 999, "persona_id": persona_id }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_historial_newest_first(pool: MySqlPool) {
    let app = common::build_test_app(pool);
    let (usuario_id, _) = register(app.clone(), "ana@example.com").await;

    let response = post_json(
        app.clone(),
        "/api/historial",
        json!({
            "usuario_id": usuario_id,
            "tipo_busqueda": "habilidad",
            "termino": "guitarra",
            "fecha": "2025-01-01T10:00:00Z",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        app.clone(),
        "/api/historial",
        json!({ "usuario_id": usuario_id, "termino": "piano" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        app.clone(),
        "/api/historial",
        json!({ "usuario_id": usuario_id, "termino": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(get(app, &format!("/api/historial/{usuario_id}")).await).await;
    assert_eq!(json["count"], 2);
    assert_eq!(json["data"][0]["termino"], "piano");
    assert_eq!(json["data"][1]["tipo_busqueda"], "habilidad");
}
