//! Coordinate validation.

use crate::error::CoreError;

/// Reject a coordinate that is present but not a finite number.
pub fn validate_coordinate(field: &str, value: Option<f64>) -> Result<(), CoreError> {
    match value {
        Some(v) if !v.is_finite() => Err(CoreError::Validation(format!(
            "{field} must be a valid number"
        ))),
        _ => Ok(()),
    }
}

/// Validate an optional latitude/longitude pair.
pub fn validate_pair(latitud: Option<f64>, longitud: Option<f64>) -> Result<(), CoreError> {
    validate_coordinate("latitud", latitud)?;
    validate_coordinate("longitud", longitud)
}
