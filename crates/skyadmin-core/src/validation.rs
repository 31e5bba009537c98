//! Field validation for the editors
//!
//! Only syntax is checked here. URL uniqueness needs the server and lives in
//! the API crate (`/urlmatches`).

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

/// Display and wire format of schedule timestamps
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

static DATETIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01]) ([01]\d|2[0-3]):[0-5]\d$")
        .expect("Invalid DATETIME_RE")
});

/// Characters a record URL must never contain
const URL_FORBIDDEN: &[char] = &[
    '<', '>', '#', '%', '{', '}', '`', '\\', '^', '[', ']', '\'', '"',
];

/// Check a schedule timestamp
///
/// The text must match `YYYY-MM-DD HH:mm` exactly and name a real calendar
/// date (`2024-02-30 10:00` is rejected).
pub fn is_valid_datetime(value: &str) -> bool {
    DATETIME_RE.is_match(value) && NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).is_ok()
}

/// Why a record URL was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlError {
    Empty,
    LeadingSlash,
    TrailingSlash,
    Whitespace,
    ForbiddenChar(char),
}

impl std::fmt::Display for UrlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlError::Empty => write!(f, "URL is required"),
            UrlError::LeadingSlash => write!(f, "URL must not start with '/'"),
            UrlError::TrailingSlash => write!(f, "URL must not end with '/'"),
            UrlError::Whitespace => write!(f, "URL must not contain spaces"),
            UrlError::ForbiddenChar(c) => write!(f, "URL must not contain '{c}'"),
        }
    }
}

impl std::error::Error for UrlError {}

/// Check the syntax of a record URL
///
/// Slashes are allowed between segments but not at either end.
pub fn validate_url(value: &str) -> Result<(), UrlError> {
    if value.is_empty() {
        return Err(UrlError::Empty);
    }
    if value.starts_with('/') {
        return Err(UrlError::LeadingSlash);
    }
    if value.ends_with('/') {
        return Err(UrlError::TrailingSlash);
    }
    if value.chars().any(char::is_whitespace) {
        return Err(UrlError::Whitespace);
    }
    if let Some(c) = value.chars().find(|c| URL_FORBIDDEN.contains(c)) {
        return Err(UrlError::ForbiddenChar(c));
    }
    Ok(())
}

/// Minimal address check used by the user editor
pub fn is_valid_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_accepts_valid() {
        assert!(is_valid_datetime("2024-01-31 23:59"));
        assert!(is_valid_datetime("2024-02-29 00:00"));
    }

    #[test]
    fn test_datetime_rejects_impossible_dates() {
        assert!(!is_valid_datetime("2024-02-30 10:00"));
        assert!(!is_valid_datetime("2023-02-29 10:00"));
        assert!(!is_valid_datetime("2024-13-01 10:00"));
        assert!(!is_valid_datetime("2024-04-31 10:00"));
    }

    #[test]
    fn test_datetime_rejects_bad_shape() {
        assert!(!is_valid_datetime(""));
        assert!(!is_valid_datetime("2024-1-01 10:00"));
        assert!(!is_valid_datetime("2024-01-01 24:00"));
        assert!(!is_valid_datetime("2024-01-01 10:60"));
        assert!(!is_valid_datetime("2024-01-01T10:00"));
        assert!(!is_valid_datetime("2024-01-01 10:00:00"));
    }

    #[test]
    fn test_url_rejects_slashes_at_ends() {
        assert_eq!(validate_url("/foo"), Err(UrlError::LeadingSlash));
        assert_eq!(validate_url("foo/"), Err(UrlError::TrailingSlash));
        assert_eq!(validate_url("foo/bar"), Ok(()));
    }

    #[test]
    fn test_url_rejects_whitespace_and_reserved() {
        assert_eq!(validate_url("fo o"), Err(UrlError::Whitespace));
        assert_eq!(validate_url("foo<bar>"), Err(UrlError::ForbiddenChar('<')));
        assert_eq!(validate_url("a#b"), Err(UrlError::ForbiddenChar('#')));
        assert_eq!(validate_url(""), Err(UrlError::Empty));
    }

    #[test]
    fn test_url_accepts_plain_segment() {
        assert_eq!(validate_url("foo-bar_1"), Ok(()));
        assert_eq!(validate_url("css/site.css"), Ok(()));
    }

    #[test]
    fn test_url_error_messages() {
        assert_eq!(
            UrlError::ForbiddenChar('%').to_string(),
            "URL must not contain '%'"
        );
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email("a@b"));
        assert!(!is_valid_email("ab"));
        assert!(!is_valid_email("@b"));
        assert!(!is_valid_email("a b@c"));
    }
}
