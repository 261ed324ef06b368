//! Birth-date input validation.
//!
//! The milestone engine accepts any `NaiveDate`; this is the gate that
//! keeps empty, malformed and future input away from it.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::ValidationError;
use crate::format::parse_long_date;

/// Earliest accepted birth year.
pub const MIN_BIRTH_YEAR: i32 = 1;

/// Parse and validate raw birth-date input against `today`.
///
/// Accepts `YYYY-MM-DD` or "Month D, YYYY". Today itself is a valid
/// birth date. Years before [`MIN_BIRTH_YEAR`] are rejected.
pub fn parse_birth_date(input: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_long_date(trimmed))
        .ok_or_else(|| ValidationError::InvalidDate {
            input: trimmed.to_string(),
        })?;

    if date.year() < MIN_BIRTH_YEAR {
        return Err(ValidationError::InvalidValue {
            field: "birth_date".to_string(),
            message: format!("year {} is before {MIN_BIRTH_YEAR}", date.year()),
        });
    }
    if date > today {
        return Err(ValidationError::FutureDate { date, today });
    }
    Ok(date)
}

/// [`parse_birth_date`] against the local calendar date.
pub fn parse_birth_date_now(input: &str) -> Result<NaiveDate, ValidationError> {
    parse_birth_date(input, Local::now().date_naive())
}

/// Parse a plain `YYYY-MM-DD` date with no future check.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        input: input.trim().to_string(),
    })
}
