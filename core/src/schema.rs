//! Field validation rules for invoice input.
//!
//! Rules are checked per field and report violations as `FieldError`s, so a
//! form can show each message next to the offending input. Lengths count
//! characters, not bytes.

/// A single constraint violation, keyed by the field that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Minimum length, in characters, for the free-text invoice fields.
pub const MIN_TEXT_CHARS: usize = 2;

/// Reject values shorter than `min` characters.
pub fn min_chars(field: &'static str, label: &str, value: &str, min: usize) -> Option<FieldError> {
    if value.chars().count() < min {
        Some(FieldError {
            field,
            message: format!("{label} must be at least {min} characters."),
        })
    } else {
        None
    }
}

/// Reject amounts that are not strictly positive (zero, negative, or NaN).
pub fn positive(field: &'static str, label: &str, value: f64) -> Option<FieldError> {
    if value > 0.0 {
        None
    } else {
        Some(FieldError {
            field,
            message: format!("{label} must be a positive number."),
        })
    }
}
