//! Source of "today" for availability checks.

use chrono::{Local, NaiveDate};

/// Supplies the current calendar date.
///
/// Booking ranges must start strictly after today, so the engine reads the
/// date through this trait rather than the system clock directly.
pub trait Clock: Send + Sync {
    /// The current date.
    fn today(&self) -> NaiveDate;
}

/// Reads the local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
///
/// # Example
///
/// ```
/// use hotel_booking::availability::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
/// assert_eq!(FixedClock(date).today(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
