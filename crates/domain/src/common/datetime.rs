//! DateTime parsing utilities with consistent error handling.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::DomainError;

/// Parses an RFC3339 timestamp string, returning an error if parsing fails.
///
/// # Examples
///
/// ```
/// use linkfeed_domain::common::parse_datetime;
/// use chrono::Datelike;
///
/// let dt = parse_datetime("2024-01-15T10:30:00Z").unwrap();
/// assert_eq!(dt.year(), 2024);
/// ```
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

/// Parses either an RFC3339 timestamp or a bare `YYYY-MM-DD` date, which
/// becomes midnight UTC.
///
/// ```
/// use linkfeed_domain::common::parse_timestamp_or_date;
/// use chrono::Timelike;
///
/// let joined = parse_timestamp_or_date("2024-01-15").unwrap();
/// assert_eq!(joined.hour(), 0);
/// assert!(parse_timestamp_or_date("January").is_err());
/// ```
pub fn parse_timestamp_or_date(s: &str) -> Result<DateTime<Utc>, DomainError> {
    if let Ok(dt) = parse_datetime(s) {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DomainError::parse(format!("not a timestamp or date: '{s}'")))
}

/// Serde `deserialize_with` helper for timestamps that may be stored as a
/// bare date.
pub fn deserialize_timestamp_or_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
    parse_timestamp_or_date(&raw).map_err(serde::de::Error::custom)
}

/// Midnight UTC on the given calendar date, or the Unix epoch if the date
/// does not exist.
///
/// Seed profiles only carry a join *date*; this turns it into a timestamp.
///
/// ```
/// use linkfeed_domain::common::date_at_midnight;
/// use chrono::Datelike;
///
/// let joined = date_at_midnight(2024, 1, 15);
/// assert_eq!((joined.year(), joined.month(), joined.day()), (2024, 1, 15));
/// ```
pub fn date_at_midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_parse_datetime_valid() {
        let dt = parse_datetime("2024-01-15T10:30:00Z").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_datetime_with_timezone() {
        let dt = parse_datetime("2024-01-15T10:30:00+05:00").unwrap();
        assert_eq!(dt.hour(), 5);
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime("not-a-date").is_err());
        assert!(parse_datetime("").is_err());
        assert!(parse_datetime("2024-01-15").is_err());
    }

    #[test]
    fn test_parse_timestamp_or_date_accepts_both_forms() {
        assert_eq!(
            parse_timestamp_or_date("2024-01-15").unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_timestamp_or_date("2024-01-15T10:30:00Z").unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_timestamp_or_date_rejects_garbage() {
        let err = parse_timestamp_or_date("2024-13-40").unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn test_date_at_midnight() {
        let dt = date_at_midnight(2024, 2, 1);
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_date_at_midnight_invalid_date_falls_back_to_epoch() {
        assert_eq!(date_at_midnight(2024, 2, 30), DateTime::<Utc>::UNIX_EPOCH);
    }
}
