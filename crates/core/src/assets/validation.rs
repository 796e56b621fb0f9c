//! Field validation for asset create/update payloads.

use crate::error::CoreError;

use super::MAX_TEXT_LEN;

/// Validate a required text field: non-blank and within [`MAX_TEXT_LEN`].
pub fn validate_required_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    validate_length(field, value)
}

/// Validate an optional serial number. Only the length is constrained;
/// uniqueness is enforced by the database.
pub fn validate_serial_number(value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(serial) => validate_length("serial_number", serial),
        None => Ok(()),
    }
}

/// Validate the fields of a new asset.
pub fn validate_new_asset(
    name: &str,
    category: &str,
    serial_number: Option<&str>,
) -> Result<(), CoreError> {
    validate_required_text("name", name)?;
    validate_required_text("category", category)?;
    validate_serial_number(serial_number)
}

/// Validate only the fields an update actually provides.
pub fn validate_asset_patch(
    name: Option<&str>,
    category: Option<&str>,
    serial_number: Option<&str>,
) -> Result<(), CoreError> {
    if let Some(name) = name {
        validate_required_text("name", name)?;
    }
    if let Some(category) = category {
        validate_required_text("category", category)?;
    }
    validate_serial_number(serial_number)
}

fn validate_length(field: &str, value: &str) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > MAX_TEXT_LEN {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_TEXT_LEN} characters, got {len}"
        )));
    }
    Ok(())
}
