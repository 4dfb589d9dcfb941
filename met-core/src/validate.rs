//! Validation for user-entered date ranges.

use chrono::NaiveDate;
use thiserror::Error;

/// Longest observation window the portal serves in one request, in days.
pub const MAX_RANGE_DAYS: i64 = 31;

/// Format produced by HTML `date` inputs.
const INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("date is empty")]
    Empty,
    #[error("unparseable date: {0}")]
    BadFormat(String),
    #[error("start date is after end date")]
    StartAfterEnd,
    #[error("range spans {0} days, maximum is {MAX_RANGE_DAYS}")]
    RangeTooLong(i64),
}

fn parse_input_date(s: &str) -> Result<NaiveDate, ValidationError> {
    if s.is_empty() {
        return Err(ValidationError::Empty);
    }
    NaiveDate::parse_from_str(s, INPUT_FORMAT)
        .map_err(|_| ValidationError::BadFormat(s.to_string()))
}

/// Validate a start/end pair from the date-range picker.
///
/// Both dates must parse, start must not be after end, and the inclusive
/// span must not exceed [`MAX_RANGE_DAYS`].
pub fn validate_date_range(
    start: &str,
    end: &str,
) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    let start = parse_input_date(start)?;
    let end = parse_input_date(end)?;
    if start > end {
        return Err(ValidationError::StartAfterEnd);
    }
    let days = (end - start).num_days() + 1;
    if days > MAX_RANGE_DAYS {
        return Err(ValidationError::RangeTooLong(days));
    }
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        let (start, end) = validate_date_range("2026-03-01", "2026-03-14").unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
    }

    #[test]
    fn test_single_day_is_valid() {
        assert!(validate_date_range("2026-03-14", "2026-03-14").is_ok());
    }

    #[test]
    fn test_empty_and_malformed() {
        assert_eq!(validate_date_range("", "2026-03-14"), Err(ValidationError::Empty));
        assert_eq!(
            validate_date_range("14/03/2026", "2026-03-14"),
            Err(ValidationError::BadFormat("14/03/2026".to_string()))
        );
    }

    #[test]
    fn test_start_after_end() {
        assert_eq!(
            validate_date_range("2026-03-15", "2026-03-14"),
            Err(ValidationError::StartAfterEnd)
        );
    }

    #[test]
    fn test_range_too_long() {
        // 32 inclusive days
        assert_eq!(
            validate_date_range("2026-03-01", "2026-04-01"),
            Err(ValidationError::RangeTooLong(32))
        );
        // exactly 31 is fine
        assert!(validate_date_range("2026-03-01", "2026-03-31").is_ok());
    }
}
