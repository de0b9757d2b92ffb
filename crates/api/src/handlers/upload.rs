//! Handlers for raw image uploads to the bucket.
//!
//! These endpoints do not touch persona rows; the profile editor's slot
//! replacement lives in [`super::profile`]. Bodies here are flat (no `data`
//! wrapper) because the browser client reads `url` and `fileName` directly.

use std::collections::HashMap;

use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use skillconnect_core::error::CoreError;
use skillconnect_core::fields::trimmed_or_none;
use skillconnect_core::storage::IMAGE_FIELD;
use skillconnect_core::types::Timestamp;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::state::AppState;
use crate::sync::cleanup::discard_object;
use crate::sync::images::ImageUpload;

// ---------------------------------------------------------------------------
// Multipart parsing
// ---------------------------------------------------------------------------

/// A multipart form carrying an optional image and any text fields.
#[derive(Debug, Default)]
pub struct ImageForm {
    pub image: Option<ImageUpload>,
    pub fields: HashMap<String, String>,
}

impl ImageForm {
    /// The image part, which must be present.
    pub fn require_image(&mut self) -> Result<ImageUpload, CoreError> {
        self.image.take().ok_or_else(|| {
            CoreError::Validation(format!("No image received in field '{IMAGE_FIELD}'"))
        })
    }

    /// A non-blank text field.
    pub fn text(&self, name: &str) -> Option<String> {
        trimmed_or_none(self.fields.get(name).map(String::as_str))
    }
}

/// Read every part of `multipart`. The `image` part is buffered whole; its
/// limits are enforced by [`ImageUpload::validate`].
pub async fn read_image_form(mut multipart: Multipart) -> AppResult<ImageForm> {
    let mut form = ImageForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == IMAGE_FIELD {
            let file_name = field.file_name().unwrap_or("image").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            form.image = Some(ImageUpload {
                file_name,
                content_type,
                bytes: bytes.to_vec(),
            });
        } else {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            form.fields.insert(name, text);
        }
    }

    Ok(form)
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub url: String,
    pub file_name: String,
    /// An `oldImageUrl` was supplied and its object is confirmed deleted.
    pub replaced_old: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteImageRequest {
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteImageResponse {
    pub success: bool,
    pub message: String,
    pub file_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEntry {
    pub url: String,
    pub file_name: String,
    pub size: i64,
    pub last_modified: Option<Timestamp>,
}

#[derive(Debug, Serialize)]
pub struct ImageListResponse {
    pub success: bool,
    pub count: usize,
    pub images: Vec<ImageEntry>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/upload
///
/// Multipart `image` plus optional `oldImageUrl`. The new object is stored
/// first; the old one is then deleted best-effort, and only when its URL
/// belongs to this bucket.
pub async fn upload_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut form = read_image_form(multipart).await?;
    let image = form.require_image()?;
    image.validate()?;

    let stored = state
        .objects
        .put(image.bytes, &image.file_name, &image.content_type)
        .await?;
    tracing::info!(key = %stored.key, "Image uploaded");

    let mut replaced_old = false;
    if let Some(old_url) = form.text("oldImageUrl") {
        match state.objects.key_for_url(&old_url) {
            Ok(old_key) if old_key != stored.key => {
                replaced_old =
                    discard_object(&state.pool, state.objects.as_ref(), &old_key).await;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(url = %old_url, error = %e, "Old image URL not in bucket, skipped");
            }
        }
    }

    Ok(Json(UploadResponse {
        success: true,
        message: "Imagen subida exitosamente".into(),
        url: stored.url,
        file_name: stored.key,
        replaced_old,
    }))
}

/// DELETE /api/upload
///
/// `imageUrl` is required and must point into this bucket.
pub async fn delete_image(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<DeleteImageRequest>,
) -> AppResult<impl IntoResponse> {
    let url = trimmed_or_none(input.image_url.as_deref()).ok_or(AppError::Core(
        CoreError::Validation("imageUrl is required".into()),
    ))?;

    let key = state.objects.delete(&url).await?;
    tracing::info!(key = %key, "Image deleted");

    Ok(Json(DeleteImageResponse {
        success: true,
        message: "Imagen eliminada exitosamente".into(),
        file_name: key,
    }))
}

/// GET /api/upload/images
pub async fn list_images(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let images: Vec<ImageEntry> = state
        .objects
        .list()
        .await?
        .into_iter()
        .map(|o| ImageEntry {
            url: o.url,
            file_name: o.key,
            size: o.size,
            last_modified: o.modified_at,
        })
        .collect();

    Ok(Json(ImageListResponse {
        success: true,
        count: images.len(),
        images,
    }))
}
