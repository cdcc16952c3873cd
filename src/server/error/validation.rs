use thiserror::Error;

/// Request payload failed field-level validation.
///
/// Raised while converting request DTOs into parameter models. Controllers wrap it in
/// `AppError::BadRequest` prefixed with the resource being written.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// A required text field is empty or only whitespace.
    #[error("{0} must not be blank")]
    Blank(&'static str),

    /// A numeric field falls outside its allowed range.
    #[error("{field} must be between {min} and {max}, found {value}")]
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
        value: i32,
    },

    /// A numeric field that must not be negative is negative.
    #[error("{field} must not be negative, found {value}")]
    Negative { field: &'static str, value: i32 },

    /// Phase number does not name a roadmap phase.
    #[error("phase must be between 1 and 4, found {0}")]
    UnknownPhase(i32),
}

/// Trims `value` and rejects it when nothing remains.
pub fn require_text(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank(field));
    }

    Ok(trimmed.to_string())
}

/// Rejects values outside `min..=max`.
pub fn require_range(
    field: &'static str,
    value: i32,
    min: i32,
    max: i32,
) -> Result<i32, ValidationError> {
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }

    Ok(value)
}
