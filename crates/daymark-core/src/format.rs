//! Long-form date rendering ("March 5, 2004") and its inverse.
//!
//! Downstream consumers such as the climate overlay re-derive the year
//! from the rendered string, so whatever [`format_long_date`] emits must
//! parse back to the same date.

use chrono::{Datelike, NaiveDate};

/// chrono format string for "Month D, YYYY".
pub const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Render a date as "Month D, YYYY" with no zero padding on the day.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

/// Parse a "Month D, YYYY" string back into a date.
pub fn parse_long_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), LONG_DATE_FORMAT).ok()
}

/// Extract the year from a long-form date string.
///
/// Falls back to the trailing comma-separated field when the month name
/// is not one chrono recognizes.
pub fn year_from_long_date(s: &str) -> Option<i32> {
    if let Some(date) = parse_long_date(s) {
        return Some(date.year());
    }
    s.rsplit(',').next()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_without_day_padding() {
        assert_eq!(format_long_date(ymd(2004, 3, 5)), "March 5, 2004");
        assert_eq!(format_long_date(ymd(1999, 12, 31)), "December 31, 1999");
    }

    #[test]
    fn parses_back_to_same_date() {
        for date in [ymd(2000, 2, 29), ymd(1970, 1, 1), ymd(2099, 9, 9)] {
            assert_eq!(parse_long_date(&format_long_date(date)), Some(date));
        }
    }

    #[test]
    fn year_survives_round_trip() {
        let date = ymd(2042, 7, 14);
        assert_eq!(year_from_long_date(&format_long_date(date)), Some(2042));
    }

    #[test]
    fn year_fallback_on_unknown_month_name() {
        assert_eq!(year_from_long_date("Brumaire 3, 1799"), Some(1799));
        assert_eq!(year_from_long_date("no year here"), None);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_long_date("2020-01-01"), None);
        assert_eq!(parse_long_date(""), None);
    }
}
