//! Shared response envelope types for API handlers.
//!
//! Every success body is `{ "success": true, "data": ..., "count"?, "message"? }`.
//! Errors are produced by [`crate::error::AppError`] as
//! `{ "success": false, "error": ..., "code": ... }`.

use serde::Serialize;
use skillconnect_core::types::DbId;

/// Standard success envelope.
///
/// `data` is always serialized, so an absent optional row becomes `null`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            count: None,
            message: None,
            data,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Collection envelope carrying the item count.
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(items.len()),
            message: None,
            data: items,
        }
    }
}

/// `{ "success": true, "message": ... }` for operations without a payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// A freshly created row with its generated id repeated as `id`.
#[derive(Debug, Serialize)]
pub struct Created<T: Serialize> {
    pub id: DbId,
    #[serde(flatten)]
    pub row: T,
}
