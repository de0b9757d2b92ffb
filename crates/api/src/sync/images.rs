//! Image slot replacement.
//!
//! Order of operations for a replacement:
//!
//! 1. Check the persona exists, so nothing is uploaded for an unknown id.
//! 2. Upload the new object. A failure aborts with nothing changed.
//! 3. Swap the slot to the new URL under a row lock. The old URL is the one
//!    the swap displaced, not the one seen in step 1, so concurrent
//!    replacements each delete exactly the object they replaced. A failure
//!    (including the persona vanishing since step 1) queues the new object
//!    for deletion and aborts; the slot is untouched.
//! 4. Best-effort delete of the displaced object, if it lives in this bucket.

use serde::Serialize;
use skillconnect_core::error::CoreError;
use skillconnect_core::persona::ImageSlot;
use skillconnect_core::storage::validate_image;
use skillconnect_core::types::DbId;
use skillconnect_db::models::persona::Persona;
use skillconnect_db::repositories::PersonaRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::sync::cleanup::{defer_object_delete, discard_object};

/// An image file received from a multipart form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Enforce the content-type and size limits.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_image(&self.content_type, self.bytes.len())
    }
}

/// Result of replacing an image slot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReplacement {
    pub url: String,
    pub key: String,
    pub slot: &'static str,
    /// The slot referenced an image before this call.
    pub replaced_old: bool,
    /// The previous object is confirmed deleted from the bucket.
    pub old_deleted: bool,
}

fn persona_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Persona",
        id,
    })
}

/// Upload `upload` and make it the persona's image in `slot`.
pub async fn replace_image(
    state: &AppState,
    persona_id: DbId,
    slot: ImageSlot,
    upload: ImageUpload,
) -> AppResult<ImageReplacement> {
    upload.validate()?;

    if PersonaRepo::find_by_id(&state.pool, persona_id).await?.is_none() {
        return Err(persona_not_found(persona_id));
    }

    let stored = state
        .objects
        .put(upload.bytes, &upload.file_name, &upload.content_type)
        .await?;

    let old_url = match PersonaRepo::swap_image(&state.pool, persona_id, slot, &stored.url).await {
        Ok(Some(swap)) => swap.previous,
        Ok(None) => {
            defer_object_delete(&state.pool, &stored.key).await;
            return Err(persona_not_found(persona_id));
        }
        Err(e) => {
            defer_object_delete(&state.pool, &stored.key).await;
            return Err(e.into());
        }
    };

    let old_deleted = match old_url.as_deref() {
        Some(url) => discard_previous(state, url, &stored.key).await,
        None => false,
    };

    tracing::info!(
        persona_id,
        slot = slot.name(),
        key = %stored.key,
        old_deleted,
        "Profile image replaced"
    );

    Ok(ImageReplacement {
        url: stored.url,
        key: stored.key,
        slot: slot.name(),
        replaced_old: old_url.is_some(),
        old_deleted,
    })
}

/// Empty `slot` and best-effort delete the object it referenced.
pub async fn clear_image(state: &AppState, persona_id: DbId, slot: ImageSlot) -> AppResult<Persona> {
    let swap = PersonaRepo::swap_image(&state.pool, persona_id, slot, "")
        .await?
        .ok_or_else(|| persona_not_found(persona_id))?;

    if let Some(url) = swap.previous.as_deref() {
        discard_previous(state, url, "").await;
    }

    tracing::info!(persona_id, slot = slot.name(), "Profile image cleared");
    Ok(swap.persona)
}

/// Delete the object behind a previously stored URL.
///
/// URLs outside the bucket are left alone; `keep` guards against deleting the
/// object that was just written.
async fn discard_previous(state: &AppState, url: &str, keep: &str) -> bool {
    match state.objects.key_for_url(url) {
        Ok(key) if key == keep => false,
        Ok(key) => discard_object(&state.pool, state.objects.as_ref(), &key).await,
        Err(e) => {
            tracing::warn!(url, error = %e, "Stored image URL is outside the bucket, not deleting");
            false
        }
    }
}
