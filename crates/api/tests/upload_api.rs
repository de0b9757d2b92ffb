//! HTTP-level integration tests for `/api/upload`.

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use common::{body_json, delete_json, get, multipart, png, StubGeocoder, BUCKET_URL};
use serde_json::json;
use skillconnect_db::repositories::PendingDeleteRepo;
use skillconnect_storage::MemoryObjectStore;
use sqlx::MySqlPool;

fn app_with_bucket(pool: MySqlPool) -> (axum::Router, Arc<MemoryObjectStore>) {
    let objects = Arc::new(MemoryObjectStore::new(BUCKET_URL));
    let app = common::build_test_app_with(
        pool,
        Arc::clone(&objects),
        Arc::new(StubGeocoder::failing()),
    );
    (app, objects)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_returns_flat_body(pool: MySqlPool) {
    let (app, objects) = app_with_bucket(pool);

    let response = multipart(app, Method::POST, "/api/upload", Some(png("foto.png")), &[]).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["replacedOld"], false);
    let file_name = json["fileName"].as_str().unwrap();
    assert!(file_name.ends_with("-foto.png"));
    assert_eq!(json["url"], format!("{BUCKET_URL}/{file_name}"));
    assert_eq!(objects.content_type(file_name).as_deref(), Some("image/png"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_replaces_old_bucket_image(pool: MySqlPool) {
    let (app, objects) = app_with_bucket(pool.clone());
    objects.insert("1000-viejo.png", b"old");
    let old_url = format!("{BUCKET_URL}/1000-viejo.png");

    let response = multipart(
        app,
        Method::POST,
        "/api/upload",
        Some(png("foto.png")),
        &[("oldImageUrl", &old_url)],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["replacedOld"], true);
    assert!(!objects.contains("1000-viejo.png"));
    assert_eq!(PendingDeleteRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_ignores_foreign_old_url(pool: MySqlPool) {
    let (app, objects) = app_with_bucket(pool);
    objects.insert("1000-viejo.png", b"old");

    let response = multipart(
        app,
        Method::POST,
        "/api/upload",
        Some(png("foto.png")),
        &[("oldImageUrl", "https://elsewhere.example/1000-viejo.png")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["replacedOld"], false);
    assert!(objects.contains("1000-viejo.png"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_without_image_is_400(pool: MySqlPool) {
    let (app, objects) = app_with_bucket(pool);

    let response = multipart(app, Method::POST, "/api/upload", None, &[("otro", "x")]).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(objects.keys().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_over_limit_is_400(pool: MySqlPool) {
    let (app, objects) = app_with_bucket(pool);
    let big = vec![0u8; skillconnect_core::storage::MAX_IMAGE_BYTES + 1];

    let response = multipart(
        app,
        Method::POST,
        "/api/upload",
        Some(common::ImagePart {
            file_name: "grande.png",
            content_type: "image/png",
            bytes: &big,
        }),
        &[],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(objects.keys().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_image_by_url(pool: MySqlPool) {
    let (app, objects) = app_with_bucket(pool);
    objects.insert("1000-foto.png", b"x");

    let response = delete_json(
        app.clone(),
        "/api/upload",
        json!({ "imageUrl": format!("{BUCKET_URL}/1000-foto.png") }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["fileName"], "1000-foto.png");
    assert!(!objects.contains("1000-foto.png"));

    let response = delete_json(app.clone(), "/api/upload", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = delete_json(
        app,
        "/api/upload",
        json!({ "imageUrl": "https://elsewhere.example/1000-foto.png" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_images(pool: MySqlPool) {
    let (app, objects) = app_with_bucket(pool);
    objects.insert("1000-a.png", b"aa");
    objects.insert("1001-b.png", b"bbb");

    let json = body_json(get(app, "/api/upload/images").await).await;

    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 2);
    assert_eq!(json["images"][0]["fileName"], "1000-a.png");
    assert_eq!(json["images"][0]["size"], 2);
    assert_eq!(json["images"][1]["url"], format!("{BUCKET_URL}/1001-b.png"));
    assert!(json["images"][0]["lastModified"].is_string());
}
