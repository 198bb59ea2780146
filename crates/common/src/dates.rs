//! Date canonicalization to the `YYYY-MM-DD` form the API expects.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Text formats tried, in order, when a string is not already canonical.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%Y.%m.%d"];

/// A date as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Free text; passed through unchanged when already `YYYY-MM-DD`.
    Text(String),
    /// A calendar date.
    Date(NaiveDate),
    /// A point in time; its UTC calendar date is used.
    DateTime(DateTime<Utc>),
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(value: DateTime<Tz>) -> Self {
        Self::DateTime(value.with_timezone(&Utc))
    }
}

impl DateInput {
    /// Text form of the input, for error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Date(d) => d.to_string(),
            Self::DateTime(dt) => dt.to_rfc3339(),
        }
    }
}

/// Normalize a date to `YYYY-MM-DD`.
///
/// Strings already shaped like `YYYY-MM-DD` are returned untouched, without
/// a calendar check (`2024-02-31` passes; the API validates it). Other
/// strings are parsed as RFC 3339, RFC 2822 or a handful of unambiguous
/// year-first layouts. Anything else returns `None`; day-first forms such as
/// `15/03/2024` are never guessed at.
pub fn canonicalize_date(input: impl Into<DateInput>) -> Option<String> {
    match input.into() {
        DateInput::Text(text) => canonicalize_text(&text),
        DateInput::Date(date) => Some(format_date(date)),
        DateInput::DateTime(dt) => Some(format_date(dt.date_naive())),
    }
}

/// True for exactly four digits, dash, two digits, dash, two digits.
pub fn is_canonical_date(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn canonicalize_text(text: &str) -> Option<String> {
    let text = text.trim();

    if is_canonical_date(text) {
        return Some(text.to_string());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(format_date(dt.with_timezone(&Utc).date_naive()));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(format_date(dt.with_timezone(&Utc).date_naive()));
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(format_date(dt.date()));
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return Some(format_date(date));
        }
    }

    None
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_canonical_string_unchanged() {
        assert_eq!(canonicalize_date("2024-03-15").as_deref(), Some("2024-03-15"));
    }

    #[test]
    fn test_padded_canonical_string_trimmed() {
        assert_eq!(canonicalize_date(" 2024-03-15").as_deref(), Some("2024-03-15"));
        assert_eq!(canonicalize_date("2024-03-15\n").as_deref(), Some("2024-03-15"));
    }

    #[test]
    fn test_calendar_invalid_passes_through() {
        assert_eq!(canonicalize_date("2024-02-31").as_deref(), Some("2024-02-31"));
        assert_eq!(canonicalize_date("2024-13-45").as_deref(), Some("2024-13-45"));
    }

    #[test]
    fn test_native_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(canonicalize_date(date).as_deref(), Some("2024-03-15"));
    }

    #[test]
    fn test_datetime_uses_utc_day() {
        let offset = FixedOffset::west_opt(3 * 3600).unwrap();
        let dt = offset.with_ymd_and_hms(2024, 3, 15, 22, 30, 0).unwrap();
        // 22:30 at UTC-3 is already the 16th in UTC
        assert_eq!(canonicalize_date(dt).as_deref(), Some("2024-03-16"));
    }

    #[test]
    fn test_day_first_rejected() {
        assert_eq!(canonicalize_date("15/03/2024"), None);
    }

    #[test]
    fn test_garbage_rejected() {
        assert_eq!(canonicalize_date("yesterday"), None);
        assert_eq!(canonicalize_date(""), None);
        assert_eq!(canonicalize_date("2024-3-15"), None);
    }

    #[test]
    fn test_parsable_strings_normalized() {
        assert_eq!(
            canonicalize_date("2024-03-15T10:20:30Z").as_deref(),
            Some("2024-03-15")
        );
        assert_eq!(
            canonicalize_date("2024-03-15 10:20:30").as_deref(),
            Some("2024-03-15")
        );
        assert_eq!(canonicalize_date("2024/03/15").as_deref(), Some("2024-03-15"));
        assert_eq!(
            canonicalize_date("Fri, 15 Mar 2024 10:20:30 +0000").as_deref(),
            Some("2024-03-15")
        );
    }

    #[test]
    fn test_shape_check() {
        assert!(is_canonical_date("0000-00-00"));
        assert!(!is_canonical_date("2024-03-15 "));
        assert!(!is_canonical_date("2024/03/15"));
        assert!(!is_canonical_date("２０２４-03-15"));
    }
}
