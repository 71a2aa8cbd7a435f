use std::cell::Cell;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::errors::{Result, StructEqError};

/// Largest representable distance from the epoch, in milliseconds
pub const MAX_TIME_MS: f64 = 8.64e15;

/// A mutable instant, stored as milliseconds since the Unix epoch
///
/// A time value of `NaN` marks an invalid date.
pub struct DateValue {
    time: Cell<f64>,
}

impl DateValue {
    pub fn from_millis(millis: f64) -> Self {
        Self {
            time: Cell::new(clip(millis)),
        }
    }

    pub fn parse_rfc3339(input: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(input)
            .map(|dt| Self::from(dt.with_timezone(&Utc)))
            .map_err(|e| StructEqError::InvalidDate {
                input: input.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn time(&self) -> f64 {
        self.time.get()
    }

    pub fn set_time(&self, millis: f64) {
        self.time.set(clip(millis));
    }

    pub fn is_valid(&self) -> bool {
        !self.time().is_nan()
    }

    /// The instant as a chrono timestamp
    ///
    /// `None` for invalid dates, and also for valid dates beyond chrono's
    /// range of roughly ±262,143 years, which is narrower than
    /// [`MAX_TIME_MS`].
    pub fn to_date_time(&self) -> Option<DateTime<Utc>> {
        if !self.is_valid() {
            return None;
        }
        // clip() keeps the value integral and within i64 range
        DateTime::from_timestamp_millis(self.time() as i64)
    }
}

/// Out-of-range and non-finite inputs become NaN; the rest truncate toward zero
fn clip(millis: f64) -> f64 {
    if !millis.is_finite() || millis.abs() > MAX_TIME_MS {
        return f64::NAN;
    }
    // `+ 0.0` folds -0 into +0
    millis.trunc() + 0.0
}

impl From<DateTime<Utc>> for DateValue {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::from_millis(instant.timestamp_millis() as f64)
    }
}

impl fmt::Debug for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "Invalid Date");
        }
        match self.to_date_time() {
            Some(dt) => write!(
                f,
                "Date({})",
                dt.to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
            None => write!(f, "Date({}ms)", self.time()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_out_of_range_is_invalid() {
        assert!(!DateValue::from_millis(f64::NAN).is_valid());
        assert!(!DateValue::from_millis(f64::INFINITY).is_valid());
        assert!(!DateValue::from_millis(MAX_TIME_MS + 1.0).is_valid());
        assert!(DateValue::from_millis(MAX_TIME_MS).is_valid());
        assert!(DateValue::from_millis(-MAX_TIME_MS).is_valid());
    }

    #[test]
    fn test_valid_beyond_chrono_range() {
        for millis in [MAX_TIME_MS, 8.5e15, -MAX_TIME_MS] {
            let date = DateValue::from_millis(millis);
            assert!(date.is_valid(), "{} should be valid", millis);
            assert_eq!(date.to_date_time(), None);
        }
        assert_eq!(
            format!("{:?}", DateValue::from_millis(MAX_TIME_MS)),
            "Date(8640000000000000ms)"
        );
        assert_eq!(
            format!("{:?}", DateValue::from_millis(-MAX_TIME_MS)),
            "Date(-8640000000000000ms)"
        );
    }

    #[test]
    fn test_fraction_truncates_toward_zero() {
        assert_eq!(DateValue::from_millis(1.9).time(), 1.0);
        assert_eq!(DateValue::from_millis(-1.9).time(), -1.0);
        assert!(DateValue::from_millis(-0.5).time().is_sign_positive());
    }

    #[test]
    fn test_parse_normalizes_offset() {
        let a = DateValue::parse_rfc3339("2024-03-01T12:00:00+02:00").unwrap();
        let b = DateValue::parse_rfc3339("2024-03-01T10:00:00Z").unwrap();
        assert_eq!(a.time(), b.time());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = DateValue::parse_rfc3339("yesterday").unwrap_err();
        assert!(matches!(
            err,
            StructEqError::InvalidDate { ref input, .. } if input == "yesterday"
        ));
    }

    #[test]
    fn test_chrono_round_trip() {
        let instant = Utc.with_ymd_and_hms(2001, 9, 9, 1, 46, 40).unwrap();
        let date = DateValue::from(instant);
        assert_eq!(date.time(), 1_000_000_000_000.0);
        assert_eq!(date.to_date_time(), Some(instant));
    }

    #[test]
    fn test_set_time_clips() {
        let date = DateValue::from_millis(0.0);
        date.set_time(f64::NEG_INFINITY);
        assert!(!date.is_valid());
        assert_eq!(format!("{:?}", date), "Invalid Date");

        date.set_time(0.0);
        assert_eq!(format!("{:?}", date), "Date(1970-01-01T00:00:00.000Z)");
    }
}
