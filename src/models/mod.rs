//! Response models and their conversion from stored rows.
//!
//! A model is only built once both of its timestamps have parsed as RFC3339.
//! Batch conversion stops at the first bad row and returns nothing else.

use chrono::{DateTime, Utc};
use thiserror::Error;

pub mod note;
pub mod user;

pub use note::Note;
pub use user::User;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("invalid {field} timestamp '{value}': {source}")]
    TimestampParse {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Parse an RFC3339 column value, tagging failures with the column name
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, ConvertError> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|source| ConvertError::TimestampParse {
            field,
            value: value.to_string(),
            source,
        })
}

/// Convert rows in order; the first failure aborts the whole batch.
pub fn convert_records<R, M>(rows: Vec<R>) -> Result<Vec<M>, ConvertError>
where
    M: TryFrom<R, Error = ConvertError>,
{
    rows.into_iter().map(M::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_utc_timestamp() {
        let parsed = parse_timestamp("created_at", "2023-10-24T12:00:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 10, 24, 12, 0, 0).unwrap());
    }

    #[test]
    fn normalizes_offsets_to_utc() {
        let parsed = parse_timestamp("created_at", "2023-10-24T14:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 10, 24, 12, 0, 0).unwrap());
    }

    #[test]
    fn keeps_fractional_seconds() {
        let parsed = parse_timestamp("updated_at", "2023-10-24T12:00:00.123456789Z").unwrap();
        assert_eq!(parsed.timestamp_subsec_nanos(), 123_456_789);
    }

    #[test]
    fn reports_field_and_value_on_failure() {
        let err = parse_timestamp("updated_at", "invalid-date").unwrap_err();
        let ConvertError::TimestampParse { field, value, .. } = &err;
        assert_eq!(*field, "updated_at");
        assert_eq!(value, "invalid-date");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn rejects_dates_without_time() {
        assert!(parse_timestamp("created_at", "2023-10-24").is_err());
        assert!(parse_timestamp("created_at", "").is_err());
    }
}
