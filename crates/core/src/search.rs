//! Substring filters for the position listing.
//!
//! Filters arrive as raw query-string values. A blank value means "no
//! filter". Non-blank values become SQL `LIKE` patterns with the wildcard
//! characters escaped, so `50%` matches the literal text `50%`.

/// Escape character used in every `LIKE ... ESCAPE` clause built from
/// [`contains_pattern`].
pub const LIKE_ESCAPE: char = '\\';

/// Treat empty and whitespace-only filter values as absent.
pub fn normalize_filter(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.trim().is_empty())
}

/// Build a `LIKE` pattern that matches any value containing `needle`.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Normalized employer and major filters for the student position listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionFilter {
    /// Pattern matched against employer name OR company name.
    pub employer_pattern: Option<String>,
    /// Pattern matched against the position's majors of interest.
    pub major_pattern: Option<String>,
}

impl PositionFilter {
    pub fn new(employer: Option<&str>, major: Option<&str>) -> Self {
        Self {
            employer_pattern: normalize_filter(employer).map(contains_pattern),
            major_pattern: normalize_filter(major).map(contains_pattern),
        }
    }
}
