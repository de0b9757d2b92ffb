#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::MySqlPool;
use tower::ServiceExt;

use skillconnect_api::auth::jwt::JwtConfig;
use skillconnect_api::config::ServerConfig;
use skillconnect_api::geocoding::{GeocodeError, GeocoderConfig, ReverseGeocode, ReverseGeocoder};
use skillconnect_api::router::build_app_router;
use skillconnect_api::state::AppState;
use skillconnect_storage::{MemoryObjectStore, ObjectStore};

/// Public base URL of the in-memory bucket used by every test app.
pub const BUCKET_URL: &str = "https://images.test";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://127.0.0.1:5500".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        object_sweep_interval_secs: 300,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_days: 7,
        },
        geocoder: GeocoderConfig {
            base_url: "http://geocoder.invalid".to_string(),
            user_agent: "skillconnect-tests".to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// Geocoder stub
// ---------------------------------------------------------------------------

/// Reverse geocoder that returns a fixed answer (or fails) and counts calls.
pub struct StubGeocoder {
    answer: Option<ReverseGeocode>,
    calls: AtomicUsize,
}

impl StubGeocoder {
    pub fn found(answer: ReverseGeocode) -> Self {
        Self {
            answer: Some(answer),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReverseGeocoder for StubGeocoder {
    async fn reverse(&self, _lat: f64, _lon: f64) -> Result<ReverseGeocode, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone().ok_or(GeocodeError::HttpStatus(503))
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Build the full application router (same middleware stack as `main.rs`)
/// with an empty in-memory bucket and a failing geocoder.
pub fn build_test_app(pool: MySqlPool) -> Router {
    build_test_app_with(
        pool,
        Arc::new(MemoryObjectStore::new(BUCKET_URL)),
        Arc::new(StubGeocoder::failing()),
    )
}

/// Build the application router around caller-owned fakes so a test can
/// inspect the bucket or the geocoder afterwards.
pub fn build_test_app_with(
    pool: MySqlPool,
    objects: Arc<MemoryObjectStore>,
    geocoder: Arc<StubGeocoder>,
) -> Router {
    build_test_app_with_store(pool, objects, geocoder)
}

/// Like [`build_test_app_with`], for a store that wraps or replaces the
/// in-memory bucket.
pub fn build_test_app_with_store(
    pool: MySqlPool,
    objects: Arc<dyn ObjectStore>,
    geocoder: Arc<StubGeocoder>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        objects,
        geocoder,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn with_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    with_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    with_json(app, Method::PUT, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    with_json(app, Method::PATCH, uri, body).await
}

pub async fn delete_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    with_json(app, Method::DELETE, uri, body).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// An image part for [`multipart`].
pub struct ImagePart<'a> {
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub bytes: &'a [u8],
}

pub fn png(file_name: &str) -> ImagePart<'_> {
    ImagePart {
        file_name,
        content_type: "image/png",
        bytes: b"\x89PNG\r\n\x1a\nfake",
    }
}

/// Send a `multipart/form-data` request with an optional `image` part and
/// text fields.
pub async fn multipart(
    app: Router,
    method: Method,
    uri: &str,
    image: Option<ImagePart<'_>>,
    fields: &[(&str, &str)],
) -> Response {
    const BOUNDARY: &str = "skillconnect-test-boundary";
    let mut body: Vec<u8> = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some(part) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                part.file_name, part.content_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(part.bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a persona through the API and return its id.
pub async fn create_persona(app: Router, identificacion: &str) -> i64 {
    let body = serde_json::json!({
        "nombre": "Ana",
        "apellido": "Gómez",
        "identificacion": identificacion,
    });
    let response = post_json(app, "/api/personas", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
