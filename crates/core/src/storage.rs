//! Object-store key rules and image upload limits.
//!
//! Objects are addressed as `<public base>/<key>` where the key is
//! `<unix millis>-<original filename>`. The key is unique in practice; two
//! uploads of the same name in the same millisecond would collide and the
//! second overwrites the first.

use crate::error::CoreError;

/// Maximum accepted image size (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Multipart field carrying the image bytes.
pub const IMAGE_FIELD: &str = "image";

/// Build the object key for an upload made at `unix_millis`.
///
/// Path separators in the client-supplied name are replaced so the key is
/// always a single path segment; [`key_from_url`] depends on that.
pub fn object_key(unix_millis: i64, original_name: &str) -> String {
    let name: String = original_name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{unix_millis}-{name}")
}

/// Join the bucket's public base URL and a key.
pub fn public_url(public_base: &str, key: &str) -> String {
    format!("{}/{key}", public_base.trim_end_matches('/'))
}

/// Derive the object key from a public URL.
///
/// The URL must start with the configured public base; the key is the last
/// path segment. Anything else is rejected before a delete is attempted.
pub fn key_from_url(public_base: &str, url: &str) -> Result<String, CoreError> {
    let base = public_base.trim_end_matches('/');
    let rest = url
        .strip_prefix(base)
        .and_then(|r| r.strip_prefix('/'))
        .ok_or_else(|| {
            CoreError::Validation(format!("URL does not belong to the image bucket: {url}"))
        })?;

    match rest.rsplit('/').next() {
        Some(key) if !key.is_empty() => Ok(key.to_string()),
        _ => Err(CoreError::Validation(format!(
            "Could not extract an object key from URL: {url}"
        ))),
    }
}

/// Check an upload's declared content type and size.
pub fn validate_image(content_type: &str, len: usize) -> Result<(), CoreError> {
    if !content_type.starts_with("image/") {
        return Err(CoreError::Validation("Only image uploads are allowed".into()));
    }
    if len == 0 {
        return Err(CoreError::Validation("Uploaded image is empty".into()));
    }
    if len > MAX_IMAGE_BYTES {
        return Err(CoreError::Validation(format!(
            "Image exceeds the {} MiB limit",
            MAX_IMAGE_BYTES / (1024 * 1024)
        )));
    }
    Ok(())
}
