//! The booking manager: availability queries and booking creation over the
//! storage collaborators.

use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::error::BookingResult;
use crate::models::{Booking, BookingId, NewBooking, Room, RoomId};
use crate::repository::{BookingRepository, RoomRepository};

use super::clock::{Clock, SystemClock};
use super::occupancy::{DateOccupancy, fully_occupied_dates, occupancy_by_date};
use super::range_validation::{validate_report_range, validate_reservation_range};
use super::room_selection::{find_first_free_room, room_is_free};

/// Answers availability questions and creates bookings.
///
/// Every query takes a fresh snapshot of rooms and bookings from the
/// repositories. Booking creation holds an internal lock across the
/// availability check and the insert, so concurrent callers sharing one
/// manager cannot both be given the last free room for overlapping dates.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use hotel_booking::availability::{BookingManager, FixedClock};
/// use hotel_booking::models::{NewBooking, Room};
/// use hotel_booking::repository::{InMemoryBookingRepository, InMemoryRoomRepository};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let manager = BookingManager::with_clock(
///     Arc::new(InMemoryBookingRepository::new()),
///     Arc::new(InMemoryRoomRepository::new(vec![Room::new(1, "A")])),
///     Arc::new(FixedClock(today)),
/// );
///
/// let stay = NewBooking {
///     customer_id: 1,
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 7).unwrap(),
/// };
/// assert!(manager.create_booking(stay.clone())?);
/// assert!(!manager.create_booking(stay)?);
/// # Ok::<(), hotel_booking::error::BookingError>(())
/// ```
pub struct BookingManager {
    bookings: Arc<dyn BookingRepository>,
    rooms: Arc<dyn RoomRepository>,
    clock: Arc<dyn Clock>,
    booking_lock: Mutex<()>,
}

impl BookingManager {
    /// Creates a manager that reads today's date from the system clock.
    pub fn new(bookings: Arc<dyn BookingRepository>, rooms: Arc<dyn RoomRepository>) -> Self {
        Self::with_clock(bookings, rooms, Arc::new(SystemClock))
    }

    /// Creates a manager with an explicit clock.
    pub fn with_clock(
        bookings: Arc<dyn BookingRepository>,
        rooms: Arc<dyn RoomRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            bookings,
            rooms,
            clock,
            booking_lock: Mutex::new(()),
        }
    }

    /// The date the manager treats as today.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Finds the first room that is free for every day of `start..=end`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(room_id))` for the first free room in room order
    /// - `Ok(None)` when every room has an overlapping active booking
    /// - `Err(InvalidRange)` when `start` is not after today or `start > end`
    pub fn find_available_room(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BookingResult<Option<RoomId>> {
        let range = validate_reservation_range(start, end, self.today())?;

        let rooms = self.rooms.get_all()?;
        let bookings = self.bookings.get_all()?;
        let room_id = find_first_free_room(&rooms, &bookings, &range);

        debug!(
            %start,
            %end,
            rooms = rooms.len(),
            bookings = bookings.len(),
            room_id = ?room_id,
            "Availability checked"
        );
        Ok(room_id)
    }

    /// Books the first free room for the requested dates.
    ///
    /// Returns `Ok(true)` when a booking was stored and `Ok(false)` when no
    /// room was free, in which case nothing is written. An invalid range is
    /// an error, not `false`.
    pub fn create_booking(&self, booking: NewBooking) -> BookingResult<bool> {
        Ok(self.create_booking_detailed(booking)?.is_some())
    }

    /// Like [`create_booking`](Self::create_booking) but returns the stored
    /// booking, with its assigned id and room.
    pub fn create_booking_detailed(&self, booking: NewBooking) -> BookingResult<Option<Booking>> {
        let _guard = self.booking_lock.lock();

        let Some(room_id) = self.find_available_room(booking.start_date, booking.end_date)? else {
            debug!(
                customer_id = booking.customer_id,
                start = %booking.start_date,
                end = %booking.end_date,
                "No room available, booking not created"
            );
            return Ok(None);
        };

        let stored = self.bookings.add(booking.assign(room_id))?;
        info!(
            booking_id = stored.id,
            customer_id = stored.customer_id,
            room_id = stored.room_id,
            start = %stored.start_date,
            end = %stored.end_date,
            "Booking created"
        );
        Ok(Some(stored))
    }

    /// Returns the dates in `start..=end` on which every room is booked.
    ///
    /// Past and same-day ranges are accepted. A hotel with no rooms has no
    /// fully occupied dates.
    pub fn fully_occupied_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BookingResult<Vec<NaiveDate>> {
        let range = validate_report_range(start, end)?;

        let rooms = self.rooms.get_all()?;
        let bookings = self.bookings.get_all()?;
        let dates = fully_occupied_dates(&rooms, &bookings, &range);

        debug!(%start, %end, fully_occupied = dates.len(), "Occupancy computed");
        Ok(dates)
    }

    /// Reports the number of occupied rooms for each date in `start..=end`.
    pub fn occupancy_by_date(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BookingResult<Vec<DateOccupancy>> {
        let range = validate_report_range(start, end)?;

        let rooms = self.rooms.get_all()?;
        let bookings = self.bookings.get_all()?;
        Ok(occupancy_by_date(&rooms, &bookings, &range))
    }

    /// Returns true if `room_id` has no active booking overlapping `start..=end`.
    ///
    /// Unlike [`find_available_room`](Self::find_available_room) this does
    /// not require the range to lie in the future.
    pub fn is_room_available(
        &self,
        room_id: RoomId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BookingResult<bool> {
        let range = validate_report_range(start, end)?;
        let bookings = self.bookings.get_all()?;
        Ok(room_is_free(room_id, &bookings, &range))
    }

    /// All rooms, in enumeration order.
    pub fn rooms(&self) -> BookingResult<Vec<Room>> {
        self.rooms.get_all()
    }

    /// Looks up a room by id.
    pub fn room(&self, id: RoomId) -> BookingResult<Option<Room>> {
        self.rooms.get(id)
    }

    /// All stored bookings, active or not.
    pub fn bookings(&self) -> BookingResult<Vec<Booking>> {
        self.bookings.get_all()
    }

    /// Looks up a booking by id.
    pub fn booking(&self, id: BookingId) -> BookingResult<Option<Booking>> {
        self.bookings.get(id)
    }
}
