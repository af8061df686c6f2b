//! Shared text-field validation used by value objects and entities.

use crate::domain::errors::{ValidationError, ValidationResult};

/// Trimmed, non-empty, length-capped text field.
pub(crate) fn required_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::RequiredField { field });
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::FieldTooLong {
            field,
            actual: trimmed.chars().count(),
            max,
        });
    }
    Ok(trimmed.to_string())
}

/// Optional text field: blank collapses to empty, otherwise length-capped.
pub(crate) fn optional_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::FieldTooLong {
            field,
            actual: trimmed.chars().count(),
            max,
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_trims_and_caps() {
        assert_eq!(required_text("name", "  Jane  ", 10).unwrap(), "Jane");
        assert!(required_text("name", "   ", 10).is_err());
        assert!(required_text("name", &"x".repeat(11), 10).is_err());
    }

    #[test]
    fn optional_text_collapses_blank() {
        assert_eq!(optional_text("photo", "  ", 10).unwrap(), "");
        assert_eq!(optional_text("photo", " p ", 10).unwrap(), "p");
        assert!(optional_text("photo", &"x".repeat(11), 10).is_err());
    }
}
