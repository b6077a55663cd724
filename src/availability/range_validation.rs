//! Date range validation for availability queries.
//!
//! Reservation checks and informational queries accept different ranges:
//! a reservation must start strictly after today, while occupancy reports
//! may look at the past. Both reject `start > end`.

use chrono::NaiveDate;

use crate::error::{BookingError, BookingResult};
use crate::models::DateRange;

/// Validates a range a room would be reserved for.
///
/// The start must be strictly after `today`, so the earliest valid range
/// is a single day tomorrow.
///
/// # Example
///
/// ```
/// use hotel_booking::availability::validate_reservation_range;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
/// let tomorrow = today.succ_opt().unwrap();
///
/// assert!(validate_reservation_range(tomorrow, tomorrow, today).is_ok());
/// assert!(validate_reservation_range(today, tomorrow, today).is_err());
/// ```
pub fn validate_reservation_range(
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> BookingResult<DateRange> {
    if start <= today {
        return Err(BookingError::invalid_range(
            start,
            end,
            format!("start date must be after today ({})", today),
        ));
    }
    DateRange::new(start, end)
}

/// Validates a range for an informational occupancy query.
///
/// Past and same-day ranges are allowed; only `start > end` is rejected.
pub fn validate_report_range(start: NaiveDate, end: NaiveDate) -> BookingResult<DateRange> {
    DateRange::new(start, end)
}
