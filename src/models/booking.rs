//! Booking model and related types.
//!
//! This module defines the stored [`Booking`] record and the
//! [`NewBooking`] request a caller hands to the engine before a room has
//! been chosen.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::BookingResult;

use super::date_range::DateRange;
use super::room::RoomId;

/// Identifier of a stored booking, assigned by the booking store.
pub type BookingId = u32;

/// Opaque customer reference. The engine never inspects it.
pub type CustomerId = u32;

/// A reservation of one room for an inclusive range of dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier, assigned by the booking store on insert.
    pub id: BookingId,
    /// The customer holding the booking.
    pub customer_id: CustomerId,
    /// The room the booking occupies.
    pub room_id: RoomId,
    /// First night of the stay.
    pub start_date: NaiveDate,
    /// Last night of the stay (inclusive).
    pub end_date: NaiveDate,
    /// Inactive (cancelled) bookings are ignored by every availability query.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Booking {
    /// Returns the booking's dates as a [`DateRange`].
    ///
    /// Stored bookings are not re-validated on read, so a record with its
    /// dates reversed yields an `InvalidRange` error here.
    pub fn range(&self) -> BookingResult<DateRange> {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Returns true if this booking is active and covers any day of `range`.
    ///
    /// A stored booking with reversed dates covers no day and never blocks.
    ///
    /// ```
    /// use hotel_booking::models::{Booking, DateRange};
    /// use chrono::NaiveDate;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2026, 5, day).unwrap();
    /// let booking = Booking {
    ///     id: 1,
    ///     customer_id: 1,
    ///     room_id: 1,
    ///     start_date: d(10),
    ///     end_date: d(20),
    ///     is_active: true,
    /// };
    ///
    /// assert!(booking.blocks(&DateRange::new(d(20), d(25)).unwrap()));
    /// assert!(!booking.blocks(&DateRange::new(d(21), d(25)).unwrap()));
    /// ```
    pub fn blocks(&self, range: &DateRange) -> bool {
        self.active_range().is_some_and(|own| own.overlaps(range))
    }

    /// The booking's dates if it is active and well-formed.
    pub(crate) fn active_range(&self) -> Option<DateRange> {
        if !self.is_active {
            return None;
        }
        self.range().ok()
    }
}

/// The caller-supplied part of a booking.
///
/// The engine picks the room and marks the booking active; the store
/// assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    /// The customer making the booking.
    pub customer_id: CustomerId,
    /// First night of the stay.
    pub start_date: NaiveDate,
    /// Last night of the stay (inclusive).
    pub end_date: NaiveDate,
}

impl NewBooking {
    /// Turns the request into an active booking for `room_id`.
    ///
    /// The id is left at zero for the store to fill in.
    pub fn assign(self, room_id: RoomId) -> Booking {
        Booking {
            id: 0,
            customer_id: self.customer_id,
            room_id,
            start_date: self.start_date,
            end_date: self.end_date,
            is_active: true,
        }
    }
}
