//! Conversion of `DateLastUpdated` strings to epoch milliseconds

use chrono::{DateTime, NaiveDate};

/// Error returned when a date string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unparsable date '{raw}'")]
pub struct DateError {
    /// The offending input
    pub raw: String,
}

impl DateError {
    /// Create an error for the given input
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

/// Turns a raw date string into an epoch-based integer
pub trait DateParser {
    /// Parse `raw`, failing on input that is not a date
    fn parse_date(&self, raw: &str) -> Result<i64, DateError>;
}

impl<F> DateParser for F
where
    F: Fn(&str) -> Result<i64, DateError>,
{
    fn parse_date(&self, raw: &str) -> Result<i64, DateError> {
        self(raw)
    }
}

/// Parses ISO-8601 dates (`2024-01-31`) and RFC 3339 timestamps into
/// milliseconds since the Unix epoch, UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoDateParser;

impl DateParser for IsoDateParser {
    fn parse_date(&self, raw: &str) -> Result<i64, DateError> {
        let trimmed = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp_millis())
                .ok_or_else(|| DateError::new(raw));
        }
        DateTime::parse_from_rfc3339(trimmed)
            .map(|dt| dt.timestamp_millis())
            .map_err(|_| DateError::new(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_date() {
        assert_eq!(IsoDateParser.parse_date("1970-01-01").unwrap(), 0);
        assert_eq!(IsoDateParser.parse_date("1970-01-02").unwrap(), 86_400_000);
        assert_eq!(
            IsoDateParser.parse_date("2024-03-15").unwrap(),
            1_710_460_800_000
        );
    }

    #[test]
    fn test_rfc3339_timestamp() {
        assert_eq!(
            IsoDateParser.parse_date("1970-01-01T00:00:01Z").unwrap(),
            1_000
        );
        assert_eq!(
            IsoDateParser.parse_date("1970-01-01T01:00:00+01:00").unwrap(),
            0
        );
    }

    #[test]
    fn test_unparsable() {
        let err = IsoDateParser.parse_date("last tuesday").unwrap_err();
        assert_eq!(err.raw, "last tuesday");
        assert!(IsoDateParser.parse_date("2024-02-30").is_err());
        assert!(IsoDateParser.parse_date("").is_err());
    }

    #[test]
    fn test_closure_parser() {
        let fixed = |_: &str| -> Result<i64, DateError> { Ok(42) };
        assert_eq!(fixed.parse_date("anything").unwrap(), 42);
    }
}
