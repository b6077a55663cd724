//! Inclusive calendar date ranges.
//!
//! This module defines [`DateRange`], the unit every availability and
//! occupancy question is asked in. Both endpoints are whole days and both
//! are part of the range, so a one-night stay on the 10th is `10..=10`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, BookingResult};

/// An inclusive range of calendar dates with `start <= end`.
///
/// # Example
///
/// ```
/// use hotel_booking::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 3, 12).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(range.len_days(), 3);
/// assert_eq!(range.days().last(), NaiveDate::from_ymd_opt(2026, 3, 12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = BookingError;

    fn try_from(raw: RawDateRange) -> BookingResult<Self> {
        DateRange::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Creates a range, rejecting `start > end` with [`BookingError::InvalidRange`].
    pub fn new(start: NaiveDate, end: NaiveDate) -> BookingResult<Self> {
        if start > end {
            return Err(BookingError::invalid_range(
                start,
                end,
                "start date is after end date",
            ));
        }
        Ok(Self { start, end })
    }

    /// The first day of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last day of the range.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if the two ranges share at least one day.
    ///
    /// Touching endpoints overlap: `1..=5` and `5..=9` share the 5th.
    ///
    /// ```
    /// use hotel_booking::models::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2026, 3, day).unwrap();
    /// let a = DateRange::new(d(1), d(5)).unwrap();
    ///
    /// assert!(a.overlaps(&DateRange::new(d(5), d(9)).unwrap()));
    /// assert!(!a.overlaps(&DateRange::new(d(6), d(9)).unwrap()));
    /// ```
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// The days both ranges share, or `None` if they do not overlap.
    pub fn intersection(&self, other: &DateRange) -> Option<DateRange> {
        self.overlaps(other).then(|| DateRange {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// The smallest range containing both `a` and `b`.
    pub fn span_of(a: &DateRange, b: &DateRange) -> DateRange {
        DateRange {
            start: a.start.min(b.start),
            end: a.end.max(b.end),
        }
    }

    /// The number of days in the range, counting both endpoints.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterates over every date in the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}
