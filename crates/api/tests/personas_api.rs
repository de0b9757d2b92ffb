//! HTTP-level integration tests for `/api/personas`.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_persona, delete, get, patch_json, post_json, post_raw, put_json};
use serde_json::json;
use sqlx::MySqlPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_persona_returns_201_with_id(pool: MySqlPool) {
    let app = common::build_test_app(pool);

    let body = json!({
        "nombre": "Ana",
        "apellido": "Gómez",
        "identificacion": "30111222",
        "genero": "Femenino",
        "tipoIdentificacion": "DNI",
    });
    let response = post_json(app, "/api/personas", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let id = json["data"]["id"].as_i64().unwrap();
    assert_eq!(json["data"]["id_Perfil_Persona"], id);
    assert_eq!(json["data"]["nombre_Persona"], "Ana");
    assert_eq!(json["data"]["genero_Persona"], "Femenino");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_persona_requires_core_fields(pool: MySqlPool) {
    let app = common::build_test_app(pool);

    let body = json!({ "nombre": "Ana", "apellido": "  " , "identificacion": "1" });
    let response = post_json(app.clone(), "/api/personas", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json!({ "nombre": "Ana", "apellido": "Gómez" });
    let response = post_json(app, "/api/personas", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_gender_is_rejected_and_nothing_written(pool: MySqlPool) {
    let app = common::build_test_app(pool);

    let body = json!({
        "nombre": "Ana",
        "apellido": "Gómez",
        "identificacion": "30111222",
        "genero": "Alien",
    });
    let response = post_json(app.clone(), "/api/personas", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);

    let list = body_json(get(app, "/api/personas").await).await;
    assert_eq!(list["count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_gender_on_update_keeps_row(pool: MySqlPool) {
    let app = common::build_test_app(pool);
    let id = create_persona(app.clone(), "30111222").await;

    let response = put_json(
        app.clone(),
        &format!("/api/personas/{id}"),
        json!({ "genero": "Alien", "nombre": "Otra" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(get(app, &format!("/api/personas/{id}")).await).await;
    assert_eq!(json["data"]["nombre_Persona"], "Ana");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_keeps_omitted_fields(pool: MySqlPool) {
    let app = common::build_test_app(pool);
    let id = create_persona(app.clone(), "30111222").await;

    let response = patch_json(
        app.clone(),
        &format!("/api/personas/{id}"),
        json!({ "descripcionPerfil_Persona": "Profesora de piano" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, &format!("/api/personas/{id}")).await).await;
    assert_eq!(json["data"]["descripcionPerfil_Persona"], "Profesora de piano");
    assert_eq!(json["data"]["nombre_Persona"], "Ana");
    assert_eq!(json["data"]["identificacion_Persona"], "30111222");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_persona_is_404(pool: MySqlPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/personas/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let response = put_json(app.clone(), "/api/personas/999", json!({ "nombre": "X" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app, "/api/personas/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_id_is_400_envelope(pool: MySqlPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/personas/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_json_is_400(pool: MySqlPool) {
    let app = common::build_test_app(pool);

    let response = post_raw(app, "/api/personas", "{\"nombre\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["success"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_identificacion_is_409(pool: MySqlPool) {
    let app = common::build_test_app(pool);
    create_persona(app.clone(), "30111222").await;

    let body = json!({ "nombre": "Luis", "apellido": "Paz", "identificacion": "30111222" });
    let response = post_json(app, "/api/personas", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_persona_without_dependents(pool: MySqlPool) {
    let app = common::build_test_app(pool);
    let id = create_persona(app.clone(), "30111222").await;

    let response = delete(app.clone(), &format!("/api/personas/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, &format!("/api/personas/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_persona_with_skill_is_409(pool: MySqlPool) {
    let app = common::build_test_app(pool);
    let id = create_persona(app.clone(), "30111222").await;
    let response = post_json(
        app.clone(),
        "/api/habilidades",
        json!({ "nombre": "Piano", "idPersona": id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = delete(app.clone(), &format!("/api/personas/{id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = get(app, &format!("/api/personas/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
