//! Small helpers for free-text request fields.

use crate::error::CoreError;

/// Require `value` to be present and contain something other than whitespace.
///
/// Returns the trimmed value.
pub fn require_non_blank<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Trim an optional string, collapsing blank values to `None`.
pub fn trimmed_or_none(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
