//! Choosing a free room for a date range.

use crate::models::{Booking, DateRange, Room, RoomId};

/// Returns true if no active booking for `room_id` overlaps `range`.
///
/// Bookings are checked one by one; bookings that collide with each other
/// in the store do not change the answer.
pub fn room_is_free(room_id: RoomId, bookings: &[Booking], range: &DateRange) -> bool {
    !bookings
        .iter()
        .any(|b| b.room_id == room_id && b.blocks(range))
}

/// Returns the first room, in `rooms` order, that is free for all of `range`.
///
/// `None` means every room has at least one overlapping active booking.
///
/// # Example
///
/// ```
/// use hotel_booking::availability::find_first_free_room;
/// use hotel_booking::models::{Booking, DateRange, Room};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2026, 8, day).unwrap();
/// let rooms = vec![Room::new(1, "A"), Room::new(2, "B")];
/// let bookings = vec![Booking {
///     id: 1,
///     customer_id: 1,
///     room_id: 1,
///     start_date: d(10),
///     end_date: d(20),
///     is_active: true,
/// }];
///
/// let range = DateRange::new(d(12), d(14)).unwrap();
/// assert_eq!(find_first_free_room(&rooms, &bookings, &range), Some(2));
/// ```
pub fn find_first_free_room(
    rooms: &[Room],
    bookings: &[Booking],
    range: &DateRange,
) -> Option<RoomId> {
    rooms
        .iter()
        .find(|room| room_is_free(room.id, bookings, range))
        .map(|room| room.id)
}
