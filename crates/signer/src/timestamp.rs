use chrono::{DateTime, NaiveDateTime, Utc};

/// Accepted `created` formats, tried in order: fractional seconds first,
/// whole seconds as the fallback. Only a literal trailing `Z` marks UTC;
/// no other timezone notation is accepted.
///
/// `%.f` interprets the digits after the dot as a decimal fraction of a
/// second (bare `%f` would read them as a raw nanosecond count). It also
/// matches an absent fraction, so the whole-second form stays listed to
/// keep the accepted grammar explicit.
const ACCEPTED_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.fZ", "%Y-%m-%dT%H:%M:%SZ"];

/// The `created` string matched none of the accepted formats.
#[derive(Debug, Clone, thiserror::Error)]
#[error("timestamp {0:?} matches no accepted format")]
pub struct TimestampFormatError(pub String);

/// Parse a request `created` string into an unambiguous UTC instant.
pub fn parse_created(created: &str) -> Result<DateTime<Utc>, TimestampFormatError> {
    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(created, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TimestampFormatError(created.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_fractional_seconds() {
        let parsed = parse_created("2023-01-01T00:00:00.123456Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2023-01-01T00:00:00.123456+00:00");
        assert_eq!(parsed.nanosecond(), 123_456_000);
    }

    #[test]
    fn parses_whole_seconds() {
        let parsed = parse_created("2023-01-01T00:00:00Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2023-01-01T00:00:00+00:00");
        assert_eq!(parsed.nanosecond(), 0);
    }

    #[test]
    fn fractional_digits_scale_as_decimal_fraction() {
        // Digits after the dot are a fraction of a second, regardless of count.
        let cases = [
            ("2023-01-01T00:00:00.123456Z", 123_456_000),
            ("2023-01-01T00:00:00.123Z", 123_000_000),
            ("2023-01-01T00:00:00.5Z", 500_000_000),
            ("2023-01-01T00:00:00.000001Z", 1_000),
        ];
        for (input, nanos) in cases {
            assert_eq!(parse_created(input).unwrap().nanosecond(), nanos, "{input}");
        }
    }

    #[test]
    fn rejects_numeric_offset() {
        assert!(parse_created("2023-01-01T00:00:00+00:00").is_err());
    }

    #[test]
    fn rejects_missing_z_suffix() {
        assert!(parse_created("2023-01-01T00:00:00").is_err());
    }

    #[test]
    fn rejects_date_only() {
        assert!(parse_created("2023-01-01").is_err());
    }

    #[test]
    fn rejects_empty_string() {
        assert!(parse_created("").is_err());
    }

    #[test]
    fn error_names_the_input() {
        let error = parse_created("not-a-timestamp").unwrap_err();
        assert!(error.to_string().contains("not-a-timestamp"));
    }
}
