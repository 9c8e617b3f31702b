//! Presentation-boundary date parsing.
//!
//! Dates travel as ISO-8601 strings end to end; the gateway and cache
//! treat them as opaque. These helpers are for the presentation layer
//! only.

use chrono::{DateTime, NaiveDate, ParseError, Utc};

/// Parse a date-valued field (`establishment_date`, `date_of_birth`, ...).
pub fn parse_date(value: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
}

/// Parse a timestamp field (`created_at`, `updated_at`, `last_login`).
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ParseError> {
    DateTime::parse_from_rfc3339(value).map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parses_plain_dates() {
        let d = parse_date("1998-04-23").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (1998, 4, 23));
    }

    #[test]
    fn parses_rfc3339_timestamps() {
        let t = parse_timestamp("2024-06-01T09:30:00Z").unwrap();
        assert_eq!(t.year(), 2024);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date("next tuesday").is_err());
        assert!(parse_timestamp("2024-06-01").is_err());
    }
}
