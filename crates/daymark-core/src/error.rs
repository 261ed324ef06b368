//! Core error types for daymark-core.
//!
//! The milestone engine itself never fails. Errors come from the layers
//! around it: birth-date validation, timeline lookups and the config file.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for daymark-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the config tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No birth date given
    #[error("Please enter your birth date")]
    EmptyInput,

    /// Input is not a calendar date
    #[error("Invalid date '{input}': expected YYYY-MM-DD or \"Month D, YYYY\"")]
    InvalidDate { input: String },

    /// Birth date lies after today
    #[error("Birth date {date} is in the future (today is {today})")]
    FutureDate {
        date: chrono::NaiveDate,
        today: chrono::NaiveDate,
    },

    /// Out of bounds
    #[error("Index {index} out of bounds for {collection} (length: {len})")]
    OutOfBounds {
        collection: String,
        index: usize,
        len: usize,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn validation_errors_convert_into_core_error() {
        let err: CoreError = ValidationError::EmptyInput.into();
        assert!(matches!(err, CoreError::Validation(ValidationError::EmptyInput)));
        assert_eq!(
            err.to_string(),
            "Validation error: Please enter your birth date"
        );
    }

    #[test]
    fn future_date_message_names_both_dates() {
        let err = ValidationError::FutureDate {
            date: NaiveDate::from_ymd_opt(2031, 1, 1).unwrap(),
            today: NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2031-01-01"));
        assert!(msg.contains("2030-06-01"));
    }

    #[test]
    fn invalid_value_names_the_field() {
        let err = ValidationError::InvalidValue {
            field: "birth_date".into(),
            message: "year 0 is before 1".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'birth_date': year 0 is before 1"
        );
    }

    #[test]
    fn out_of_bounds_reports_length() {
        let err = ValidationError::OutOfBounds {
            collection: "timeline".into(),
            index: 9,
            len: 8,
        };
        assert_eq!(
            err.to_string(),
            "Index 9 out of bounds for timeline (length: 8)"
        );
    }
}
