//! Instant reference parsing and resolution

use crate::error::{Result, TagError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Format the conformance harness and `date` output use
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Represents an instant reference that can be resolved to a naive UTC instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstantReference {
    /// The clock's current instant
    Now,
    /// Specific instant
    At(NaiveDateTime),
}

impl InstantReference {
    /// Parse an instant reference string
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        if trimmed.eq_ignore_ascii_case("now") {
            return Ok(InstantReference::Now);
        }

        if let Some(seconds) = trimmed.strip_prefix('@') {
            let seconds: i64 = seconds
                .parse()
                .map_err(|_| TagError::InvalidInstant(input.to_string()))?;
            return from_unix_seconds(seconds).map(InstantReference::At);
        }

        // RFC 3339 carries an offset; drop it by converting to UTC wall clock
        if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(InstantReference::At(date_time.naive_utc()));
        }

        for format in [DATETIME_FORMAT, "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(date_time) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(InstantReference::At(date_time));
            }
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(|date| InstantReference::At(date.and_time(NaiveTime::MIN)))
            .map_err(|_| TagError::InvalidInstant(input.to_string()))
    }

    /// Resolve this reference, using `now` for `Now`
    pub fn resolve(&self, now: NaiveDateTime) -> NaiveDateTime {
        match self {
            InstantReference::Now => now,
            InstantReference::At(instant) => *instant,
        }
    }
}

/// Naive UTC instant of a unix timestamp
pub fn from_unix_seconds(seconds: i64) -> Result<NaiveDateTime> {
    DateTime::from_timestamp(seconds, 0)
        .map(|date_time| date_time.naive_utc())
        .ok_or_else(|| TagError::InvalidInstant(format!("@{}", seconds)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_now() {
        assert_eq!(InstantReference::parse("now").unwrap(), InstantReference::Now);
        assert_eq!(InstantReference::parse(" NOW ").unwrap(), InstantReference::Now);
    }

    #[test]
    fn test_parse_space_separated() {
        assert_eq!(
            InstantReference::parse("2024-09-25 13:30:00").unwrap(),
            InstantReference::At(dt(2024, 9, 25, 13, 30, 0))
        );
    }

    #[test]
    fn test_parse_t_separated() {
        assert_eq!(
            InstantReference::parse("2024-09-25T13:30:00").unwrap(),
            InstantReference::At(dt(2024, 9, 25, 13, 30, 0))
        );
    }

    #[test]
    fn test_parse_rfc3339_converts_to_utc() {
        assert_eq!(
            InstantReference::parse("2024-09-25T13:30:00Z").unwrap(),
            InstantReference::At(dt(2024, 9, 25, 13, 30, 0))
        );
        assert_eq!(
            InstantReference::parse("2024-09-25T15:30:00+02:00").unwrap(),
            InstantReference::At(dt(2024, 9, 25, 13, 30, 0))
        );
    }

    #[test]
    fn test_parse_date_only_is_midnight() {
        assert_eq!(
            InstantReference::parse("2024-01-01").unwrap(),
            InstantReference::At(dt(2024, 1, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_parse_unix_seconds() {
        assert_eq!(
            InstantReference::parse("@1704067200").unwrap(),
            InstantReference::At(dt(2024, 1, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(InstantReference::parse("tomorrow").is_err());
        assert!(InstantReference::parse("2024-13-01").is_err());
        assert!(InstantReference::parse("2024-02-30 10:00:00").is_err());
        assert!(InstantReference::parse("@soon").is_err());
        assert!(matches!(
            InstantReference::parse(""),
            Err(TagError::InvalidInstant(_))
        ));
    }

    #[test]
    fn test_resolve() {
        let now = dt(2025, 1, 17, 9, 0, 0);
        assert_eq!(InstantReference::Now.resolve(now), now);
        let at = dt(2024, 12, 25, 18, 0, 0);
        assert_eq!(InstantReference::At(at).resolve(now), at);
    }

    #[test]
    fn test_from_unix_seconds_out_of_range() {
        assert!(from_unix_seconds(i64::MAX).is_err());
    }
}
