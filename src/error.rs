//! Error types for the hotel booking engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while answering availability
//! queries or storing bookings.
//!
//! "No room is free" is deliberately absent here. It is an ordinary outcome
//! of an availability query, reported as `None` or `false` by the engine.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the hotel booking engine.
///
/// # Example
///
/// ```
/// use hotel_booking::error::BookingError;
/// use chrono::NaiveDate;
///
/// let error = BookingError::InvalidRange {
///     start: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
///     end: NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
///     reason: "start date is after end date".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date range 2026-03-10..=2026-03-08: start date is after end date"
/// );
/// ```
#[derive(Debug, Error)]
pub enum BookingError {
    /// The requested date range is malformed for the operation.
    #[error("Invalid date range {start}..={end}: {reason}")]
    InvalidRange {
        /// The first day of the requested range.
        start: NaiveDate,
        /// The last day of the requested range.
        end: NaiveDate,
        /// Why the range was rejected.
        reason: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but is inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },

    /// A booking or room store failed to read or write.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

impl BookingError {
    /// Builds an [`BookingError::InvalidRange`] for the given bounds.
    pub fn invalid_range(start: NaiveDate, end: NaiveDate, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            start,
            end,
            reason: reason.into(),
        }
    }

    /// Builds a [`BookingError::Storage`] from any displayable cause.
    pub fn storage(cause: impl std::fmt::Display) -> Self {
        Self::Storage {
            message: cause.to_string(),
        }
    }
}

/// A type alias for Results that return BookingError.
pub type BookingResult<T> = Result<T, BookingError>;
