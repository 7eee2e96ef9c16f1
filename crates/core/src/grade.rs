//! Validation for faculty-assigned placement grades.

use crate::error::CoreError;

/// Column width of `grades.grade_value`.
pub const MAX_GRADE_LEN: usize = 5;

/// Validate a grade value (non-blank, at most [`MAX_GRADE_LEN`] characters).
///
/// Returns the trimmed value to store.
pub fn validate_grade_value(raw: &str) -> Result<&str, CoreError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(CoreError::Validation("Grade must not be empty".into()));
    }
    if value.chars().count() > MAX_GRADE_LEN {
        return Err(CoreError::Validation(format!(
            "Grade must be at most {MAX_GRADE_LEN} characters"
        )));
    }
    Ok(value)
}
