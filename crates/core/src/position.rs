//! Validation for employer-submitted position postings.
//!
//! Text fields are stored exactly as submitted. The two numeric fields are
//! parsed here: a blank value is stored as NULL, anything else must be a
//! whole number within range.

use crate::error::CoreError;

/// Upper bound for `weeks` (ten years of weekly terms).
pub const MAX_WEEKS: i32 = 520;

/// Upper bound for `hours_per_week` (hours in a week).
pub const MAX_HOURS_PER_WEEK: i32 = 168;

/// Parse an optional whole-number form field.
///
/// Blank input yields `Ok(None)`. Surrounding whitespace is ignored.
pub fn parse_whole_number(field: &str, raw: &str, max: i32) -> Result<Option<i32>, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: i32 = trimmed.parse().map_err(|_| {
        CoreError::Validation(format!("{field} must be a whole number, got '{trimmed}'"))
    })?;
    if !(0..=max).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{field} must be between 0 and {max}"
        )));
    }
    Ok(Some(value))
}

/// Parsed numeric fields of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkTerm {
    pub weeks: Option<i32>,
    pub hours_per_week: Option<i32>,
}

/// Validate the duration fields of a posting form.
pub fn parse_work_term(weeks: &str, hours_per_week: &str) -> Result<WorkTerm, CoreError> {
    Ok(WorkTerm {
        weeks: parse_whole_number("weeks", weeks, MAX_WEEKS)?,
        hours_per_week: parse_whole_number("hours_per_week", hours_per_week, MAX_HOURS_PER_WEEK)?,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_plain_numbers() {
        let term = parse_work_term("12", "20").unwrap();
        assert_eq!(term.weeks, Some(12));
        assert_eq!(term.hours_per_week, Some(20));
    }

    #[test]
    fn blank_values_are_null() {
        let term = parse_work_term("", "  ").unwrap();
        assert_eq!(term.weeks, None);
        assert_eq!(term.hours_per_week, None);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_whole_number("weeks", " 8 ", MAX_WEEKS).unwrap(), Some(8));
    }

    #[test]
    fn non_numeric_is_rejected() {
        let err = parse_work_term("twelve", "20").unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg.contains("weeks"));
    }

    #[test]
    fn fractional_is_rejected() {
        assert_matches!(
            parse_whole_number("hours_per_week", "37.5", MAX_HOURS_PER_WEEK),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_matches!(
            parse_whole_number("hours_per_week", "169", MAX_HOURS_PER_WEEK),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            parse_whole_number("weeks", "-1", MAX_WEEKS),
            Err(CoreError::Validation(_))
        );
        assert_eq!(
            parse_whole_number("hours_per_week", "168", MAX_HOURS_PER_WEEK).unwrap(),
            Some(168)
        );
    }
}
